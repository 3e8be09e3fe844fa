//! Business logic.

pub mod database;
