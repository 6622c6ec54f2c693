//! Protocol data structures.

/// Ordered, pre-encoded request parameters with staged metadata.
pub mod request_parameters;
