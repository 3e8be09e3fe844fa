//! furi server error type.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use furi_api::response as res;

pub type FuriResult<T> = Result<T, FuriError>;

pub struct FuriError(eyre::Error);

impl<E> From<E> for FuriError
where
    E: Into<eyre::Error>,
{
    fn from(value: E) -> Self {
        Self(value.into())
    }
}

impl IntoResponse for FuriError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Request failed: {:#}", self.0);
        let err = res::Error {
            message: format!("{:#}", self.0),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
            Json(err),
        )
            .into_response()
    }
}
