use std::collections::VecDeque;
use std::time::{Duration, Instant};
use crate::tracker::structs::connection_pool::ConnectionPool;
use crate::tracker::structs::pooled_connection::PooledConnection;

impl ConnectionPool {
    pub fn new() -> ConnectionPool {
        ConnectionPool::default()
    }

    /// Takes the most recently returned connection.
    pub fn pop(&self) -> Option<PooledConnection> {
        self.connections.lock().pop_front()
    }

    /// Stamps the connection as used now and makes it the next one handed out.
    pub fn release(&self, connection: PooledConnection) {
        self.release_at(connection, Instant::now());
    }

    pub fn release_at(&self, mut connection: PooledConnection, last_used: Instant) {
        connection.last_used = last_used;
        self.connections.lock().push_front(connection);
    }

    /// Removes every connection idle since before `cutoff`.
    ///
    /// Idle time only grows toward the tail, so the expired entries form a
    /// suffix that is split off in one step. They come back head to tail: the
    /// most recently used of them first, the oldest last.
    pub fn take_expired(&self, cutoff: Instant) -> VecDeque<PooledConnection> {
        let mut connections = self.connections.lock();
        let keep = connections
            .iter()
            .rposition(|connection| connection.last_used >= cutoff)
            .map_or(0, |position| position + 1);
        connections.split_off(keep)
    }

    /// Drops connections idle for longer than `max_age` and returns how many.
    pub fn expire(&self, max_age: Duration) -> usize {
        let cutoff = match Instant::now().checked_sub(max_age) {
            Some(cutoff) => cutoff,
            None => return 0,
        };
        let expired = self.take_expired(cutoff);
        let count = expired.len();
        for connection in expired {
            connection.destroy();
        }
        count
    }

    pub fn drain(&self) -> Vec<PooledConnection> {
        self.connections.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.connections.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.lock().is_empty()
    }
}
