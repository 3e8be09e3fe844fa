//! Types for communication between the backend and frontend.

pub mod response;

/// Lists every record. Called with POST and an empty body.
pub const ALL_RECORDS_PATH: &str = "/api/all";
