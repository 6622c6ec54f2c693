//! Trait definitions for the file system layer.

/// Destination for downloaded bytes.
pub mod download_sink;
