//! Request handlers.

pub mod prelude;
pub mod records;
