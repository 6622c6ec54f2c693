//! Data structures for the file system layer.

/// The file system handle.
pub mod mogile_file_system;

/// Retry, timeout and buffering settings.
pub mod file_system_settings;

/// HTTP client bound to one storage origin.
pub mod file_server;

/// Stall detection for transfers.
pub mod progress_timeout;

/// Result of `create_open`.
pub mod store_destination;

/// Entry of a directory listing or path info.
pub mod filepath_entry;

/// Space usage reported for a domain.
pub mod filepath_stats;

/// Outcome of a filepath consistency check.
pub mod check_fs_result;

/// Result of an in-memory download.
pub mod download;

/// Ordered output chunks.
pub mod chunk_stream;

/// Sink buffering in memory up to a threshold.
pub mod memory_sink;

/// Sink writing into a caller file.
pub mod file_sink;

/// Sink appending to a chunk stream.
pub mod chunk_sink;
