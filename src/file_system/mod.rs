//! File operations on top of the tracker cluster.
//!
//! [`MogileFileSystem`](structs::mogile_file_system::MogileFileSystem) is the
//! entry point callers use. It runs tracker commands through the request
//! dispatcher, fetches blobs from the returned storage paths with failover,
//! and stores blobs with the `create_open`, PUT and `create_close` sequence.
//!
//! HTTP transfers use `reqwest` on a small private tokio runtime. Every public
//! method blocks the calling thread, so the type is meant for synchronous
//! callers and must not be used from inside another tokio runtime.
//!
//! # Download sinks
//!
//! - `get_file_or_bytes` keeps small blobs in memory and spills larger ones to
//!   a file.
//! - `get_file` writes into a file owned by the caller.
//! - `get_chunks` appends to a [`ChunkStream`](structs::chunk_stream::ChunkStream).
//!
//! A failed attempt on one path is undone in the sink before the next path is
//! tried.
//!
//! # Example
//!
//! ```rust,ignore
//! use mogile_client::file_system::structs::file_system_settings::FileSystemSettings;
//! use mogile_client::file_system::structs::mogile_file_system::MogileFileSystem;
//! use mogile_client::tracker::structs::tracker_registry::TrackerRegistry;
//!
//! let registry = TrackerRegistry::init_quick("127.0.0.1:7001", true)?;
//! let file_system = MogileFileSystem::new(FileSystemSettings::default(), Some(registry))?;
//! file_system.store_bytes("images", "logo", "default", b"...")?;
//! let download = file_system.get_file_or_bytes("images", "logo", None, None)?;
//! ```

/// Error type for file system operations.
pub mod errors;

/// File system enumerations (entry types, download results, chunks).
pub mod enums;

/// Data structures for the file system, file servers and sinks.
pub mod structs;

/// Download sink trait.
pub mod traits;

/// Implementation blocks for file system types.
pub mod impls;

/// Constants and url helpers.
#[allow(clippy::module_inception)]
pub mod file_system;
