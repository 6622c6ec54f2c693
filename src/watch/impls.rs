//! Implementation blocks for the watch structs.

/// Connecting, line reading and cache filtering.
pub mod watch_stream;

/// Enable and stop.
pub mod watch_switch;
