//! The TSV file the records are stored in.

use eyre::WrapErr;
use furi_core::{tsv, FuriganaRecord};
use std::{io::ErrorKind, path::Path};

/// Reads every record from the database at `path`.
///
/// A missing or blank database is (re)created with just the header line.
pub async fn load_or_create(path: &Path) -> eyre::Result<Vec<FuriganaRecord>> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!("Creating database at {}", path.display());
            write_header(path).await?;
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err)
                .wrap_err_with(|| format!("Failed to read database at {}", path.display()))
        }
    };

    if text.lines().all(str::is_empty) {
        tracing::info!("Database at {} is empty, writing header", path.display());
        write_header(path).await?;
        return Ok(Vec::new());
    }

    let records = tsv::parse_database(&text).wrap_err_with(|| {
        format!(
            "The database at {} is not compatible with this version",
            path.display()
        )
    })?;
    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

async fn write_header(path: &Path) -> eyre::Result<()> {
    let header = format!("{}\n", tsv::header_line());
    tokio::fs::write(path, header)
        .await
        .wrap_err_with(|| format!("Failed to write database at {}", path.display()))
}
