//! Shared helpers: logging setup and the generic error type.
//!
//! # Example
//!
//! ```rust,ignore
//! use mogile_client::common::common::setup_logging;
//! use mogile_client::config::structs::configuration::Configuration;
//!
//! let config = Configuration::init();
//! setup_logging(&config)?;
//! ```

/// Common data structures.
pub mod structs;

/// Logging setup and log level parsing.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
