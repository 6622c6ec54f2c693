//! Tracker connections, pooling and the tracker registry.
//!
//! Every tracker registered with a [`TrackerRegistry`](structs::tracker_registry::TrackerRegistry)
//! owns a LIFO pool of idle TCP connections. Trackers move between the active
//! and inactive partitions as connects fail and the maintenance thread finds
//! them reachable again.
//!
//! # Lifecycle
//!
//! 1. Build the registry with
//!    [`TrackerRegistryBuilder`](structs::tracker_registry_builder::TrackerRegistryBuilder)
//!    or `TrackerRegistry::init_quick("host:port,host:port", maintenance)`.
//! 2. Take connections with `get_connection` and hand them back with
//!    `return_connection` once a request round-tripped.
//! 3. Dropping the registry stops its maintenance thread.
//!
//! # Example
//!
//! ```rust,ignore
//! use mogile_client::tracker::structs::tracker_registry::TrackerRegistry;
//!
//! let registry = TrackerRegistry::init_quick("10.0.0.1:7001,10.0.0.2:7001", true)?;
//! if let Some(active) = registry.list_active() {
//!     for index in active {
//!         println!("{}", registry.tracker(index).unwrap());
//!     }
//! }
//! ```

/// Defaults and tracker list parsing.
#[allow(clippy::module_inception)]
pub mod tracker;

/// Error type for tracker transport, framing and registry failures.
pub mod errors;

/// Data structures for trackers, connections and pools.
pub mod structs;

/// Implementation blocks for tracker structs.
pub mod impls;
