//! # mogile-client
//!
//! A failover-aware client for MogileFS style storage clusters.
//!
//! ## Overview
//!
//! A cluster is a set of trackers that answer a line-based metadata protocol
//! and a set of HTTP file servers that hold the blobs. This crate keeps a
//! pool of tracker connections, fails over between trackers and storage
//! paths, and streams blobs to and from the file servers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mogile_client::config::structs::configuration::Configuration;
//! use mogile_client::file_system::structs::file_system_settings::FileSystemSettings;
//! use mogile_client::file_system::structs::mogile_file_system::MogileFileSystem;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let registry = config.build_registry()?;
//! let file_system = MogileFileSystem::new(FileSystemSettings::from(&config), Some(registry))?;
//! let paths = file_system.get_paths("images", "logo", true)?;
//! ```
//!
//! ## Modules
//!
//! - [`protocol`] - Tracker wire codec
//! - [`tracker`] - Tracker registry, connection pools and maintenance
//! - [`request`] - Request dispatch with tracker failover
//! - [`file_system`] - Key and filepath operations, downloads and uploads
//! - [`watch`] - Tracker event feed
//! - [`config`] - Configuration management and TOML parsing
//! - [`common`] - Logging setup and shared error type
//! - [`structs`] / [`enums`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the logging setup and the message-only error type used by the
/// configuration loader and the binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and writing the TOML configuration,
/// and turns it into a tracker registry and file system settings.
pub mod config;

/// Tracker wire protocol.
///
/// Url-encoded request building and `OK` / `ERR` reply parsing.
pub mod protocol;

/// Tracker registry module.
///
/// Holds the configured trackers, their idle connection pools, the
/// active/inactive partitions and the maintenance thread.
pub mod tracker;

/// Request dispatch over the tracker registry.
pub mod request;

/// File operations on top of the tracker cluster.
///
/// Tracker commands, the filepath plugin commands, path failover downloads
/// into several kinds of sinks and the `create_open` / PUT / `create_close`
/// upload sequence.
pub mod file_system;

/// Tracker event feed with cache event filtering.
pub mod watch;

/// CLI argument parsing.
pub mod structs;

/// CLI subcommands.
pub mod enums;
