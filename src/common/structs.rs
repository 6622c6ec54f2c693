//! Common data structures.

/// Message-only error.
pub mod custom_error;
