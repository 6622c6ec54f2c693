use std::collections::VecDeque;
use parking_lot::Mutex;
use crate::tracker::structs::pooled_connection::PooledConnection;

/// Idle connections for one tracker. The head is the most recently returned
/// connection; the tail is the longest idle.
#[derive(Debug, Default)]
pub struct ConnectionPool {
    pub(crate) connections: Mutex<VecDeque<PooledConnection>>,
}
