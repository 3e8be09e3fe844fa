//! Types for responses from the backend to the frontend.

pub use furi_core::FuriganaRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

/// The body of a successful `/api/all` response, in database order.
pub type AllRecords = Vec<FuriganaRecord>;
