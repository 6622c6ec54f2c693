//! Implementation blocks for common types.

/// Construction and `Display` for `CustomError`.
pub mod custom_error;
