//! Watch data structures.

/// Line reader over a `!watch` connection.
pub mod watch_stream;

/// Shared stop flag.
pub mod watch_switch;
