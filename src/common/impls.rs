//! Implementation blocks for common types.

/// `Display` and `Error` for `CustomError`.
pub mod custom_error;
