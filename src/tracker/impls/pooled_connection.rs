use std::ops::{Deref, DerefMut};
use std::time::Instant;
use log::debug;
use crate::tracker::structs::pooled_connection::PooledConnection;
use crate::tracker::structs::tracker_connection::TrackerConnection;

impl PooledConnection {
    pub fn new(connection: TrackerConnection) -> PooledConnection {
        PooledConnection {
            connection,
            last_used: Instant::now(),
        }
    }

    pub fn last_used(&self) -> Instant {
        self.last_used
    }

    /// Closes the socket. The value is consumed so it can never be pooled again.
    pub fn destroy(self) {
        debug!("[POOL] Closing connection to {} (tracker {})", self.connection.peer_address, self.connection.tracker_index);
    }
}

impl Deref for PooledConnection {
    type Target = TrackerConnection;

    fn deref(&self) -> &TrackerConnection {
        &self.connection
    }
}

impl DerefMut for PooledConnection {
    fn deref_mut(&mut self) -> &mut TrackerConnection {
        &mut self.connection
    }
}
