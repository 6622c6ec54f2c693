//! Configuration loading, saving and validation.
//!
//! The configuration file (`config.toml`) holds:
//! - **log_level**, **trackers** and an optional **client_id** at the top level;
//! - **file_system**: retries, timeouts and the in-memory download limit;
//! - **maintenance**: the tracker maintenance thread settings.
//!
//! # Example
//!
//! ```rust,ignore
//! use mogile_client::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let registry = config.build_registry()?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
