//! Implementation blocks for file system types.

/// Defaults and conversion from the configuration file.
pub mod file_system_settings;

/// Stall detection.
pub mod progress_timeout;

/// Streaming GET and PUT against one origin.
pub mod file_server;

/// Entry type codes.
pub mod filepath_type;

/// Chunk list handling.
pub mod chunk_stream;

/// Memory sink with spill to file.
pub mod memory_sink;

/// Caller file sink.
pub mod file_sink;

/// Chunk stream sink.
pub mod chunk_sink;

/// Construction, file server map and tracker helpers.
pub mod mogile_file_system;

/// Key commands: paths, delete, rename, sleep.
pub mod mogile_file_system_tracker;

/// Filepath plugin commands.
pub mod mogile_file_system_filepaths;

/// Path failover downloads.
pub mod mogile_file_system_download;

/// The store loop.
pub mod mogile_file_system_upload;
