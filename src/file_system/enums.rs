//! File system enumerations.

/// Type of a filepath entry.
pub mod filepath_type;

/// Where downloaded content ended up.
pub mod download_content;

/// A piece of a chunk stream.
pub mod chunk;

/// Payload for an upload.
pub mod upload_source;
