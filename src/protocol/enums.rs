//! Protocol enumerations.

/// A parsed `OK` or `ERR` reply.
pub mod tracker_response;
