use std::time::Instant;
use crate::tracker::structs::tracker_connection::TrackerConnection;

/// A connection owned by exactly one holder: the pool or a caller.
#[derive(Debug)]
pub struct PooledConnection {
    pub connection: TrackerConnection,
    pub(crate) last_used: Instant,
}
