//! Implementation blocks for configuration types.

/// Defaults, file handling, validation and registry construction.
pub mod configuration;

/// `Display` and `Error` for `ConfigurationError`.
pub mod configuration_error;
