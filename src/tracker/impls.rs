//! Implementation blocks for tracker structs.

/// Address resolution and display.
pub mod tracker_info;

/// Connect, send a request and read the reply.
pub mod tracker_connection;

/// Timestamping and explicit destruction.
pub mod pooled_connection;

/// Push, pop and expiry of idle connections.
pub mod connection_pool;

/// Activation, deactivation, listing and connection handout.
pub mod tracker_registry;

/// Maintenance thread: inactive probing and idle expiry.
pub mod tracker_registry_maintenance;

/// Builder methods.
pub mod tracker_registry_builder;

/// Ring iteration.
pub mod tracker_list;
