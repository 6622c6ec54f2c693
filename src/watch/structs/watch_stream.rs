use std::sync::Arc;
use std::time::Duration;
use crate::tracker::structs::pooled_connection::PooledConnection;
use crate::tracker::structs::tracker_registry::TrackerRegistry;
use crate::watch::structs::watch_switch::WatchSwitch;

pub struct WatchStream {
    pub(crate) registry: Arc<TrackerRegistry>,
    pub(crate) tracker_index: usize,
    /// Cache events carrying this id are our own and get skipped.
    pub(crate) client_id: Option<String>,
    pub(crate) switch: WatchSwitch,
    pub(crate) connection: Option<PooledConnection>,
    pub(crate) buffer: Vec<u8>,
    /// Next unread byte in `buffer`.
    pub(crate) position: usize,
    /// Bytes of `buffer` filled by the last read.
    pub(crate) filled: usize,
    pub(crate) max_line_length: usize,
    pub(crate) retry_wait: Duration,
}
