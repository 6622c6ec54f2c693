//! Request dispatch with reconnect and failover.
//!
//! [`request_do`](request::request_do) sends one tracker command. It walks the
//! active trackers from a random start. A stale pooled connection is retried on
//! the same tracker, and a failing tracker is skipped for the next one.

/// Request dispatch.
#[allow(clippy::module_inception)]
pub mod request;
