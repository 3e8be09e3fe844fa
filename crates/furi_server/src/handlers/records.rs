//! /api

use super::prelude::*;

// handlers

/// Responds with every record in database order.
#[instrument(skip_all)]
pub async fn all(State(records): State<Records>) -> FuriResult<Response> {
    tracing::info!("Listing {} records", records.len());

    let body = serde_json::to_vec(&*records).wrap_err("Failed to serialize records")?;
    let response = (
        [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
        body,
    )
        .into_response();
    Ok(response)
}

#[instrument]
pub async fn not_found() -> Response {
    tracing::info!("Unknown API endpoint");

    let err = res::Error {
        message: "API endpoint does not exist!".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(err)).into_response()
}
