//! Implementation blocks for protocol types.

/// Parameter accumulation and request line building.
pub mod request_parameters;

/// Accessors on parsed replies.
pub mod tracker_response;
