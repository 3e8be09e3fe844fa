//! Frequently used imports for handlers.

pub use crate::{
    error::{FuriError, FuriResult},
    Records,
};
pub use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
pub use eyre::WrapErr;
pub use furi_api::response as res;
pub use tracing::instrument;
