//! Server configuration read from the environment.

use eyre::WrapErr;
use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_SERVER_URL: &str = "0.0.0.0:8080";
pub const DEFAULT_DATABASE_PATH: &str = "./database.tsv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_url: SocketAddr,
    pub database_path: PathBuf,
}

impl Config {
    /// Reads `SERVER_URL` and `DATABASE_PATH`, falling back to the defaults when unset.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_vars(
            env::var("SERVER_URL").ok().as_deref(),
            env::var("DATABASE_PATH").ok().as_deref(),
        )
    }

    pub fn from_vars(server_url: Option<&str>, database_path: Option<&str>) -> eyre::Result<Self> {
        let server_url = server_url.unwrap_or(DEFAULT_SERVER_URL);
        let server_url = server_url
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("Invalid SERVER_URL {server_url}"))?;
        let database_path = database_path.unwrap_or(DEFAULT_DATABASE_PATH).into();
        Ok(Self {
            server_url,
            database_path,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uses_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.server_url, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_path, PathBuf::from("./database.tsv"));
    }

    #[test]
    fn reads_values() {
        let config = Config::from_vars(Some("127.0.0.1:3000"), Some("/tmp/records.tsv")).unwrap();
        assert_eq!(config.server_url, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_path, PathBuf::from("/tmp/records.tsv"));
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(Config::from_vars(Some("localhost"), None).is_err());
    }
}
