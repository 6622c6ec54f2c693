//! Data structures for tracker connectivity.

/// Address of one tracker, resolved at registration.
pub mod tracker_info;

/// An open TCP connection to a tracker.
pub mod tracker_connection;

/// A tracker connection with its last-used timestamp.
pub mod pooled_connection;

/// LIFO stack of idle connections for one tracker.
pub mod connection_pool;

/// Registered trackers, their pools and the active/inactive partitions.
pub mod tracker_registry;

/// Index sets for active and inactive trackers.
pub mod tracker_partitions;

/// Builder used to register trackers before first use.
pub mod tracker_registry_builder;

/// Snapshot of tracker indexes iterated as a ring.
pub mod tracker_list;

/// Wake-up signal shared with the maintenance thread.
pub mod maintenance_signal;
