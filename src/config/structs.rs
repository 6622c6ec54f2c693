//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Retry, timeout and buffering settings for file operations.
pub mod file_system_config;

/// Tracker maintenance thread settings.
pub mod maintenance_config;
