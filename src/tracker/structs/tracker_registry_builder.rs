use std::sync::Arc;
use std::time::Duration;
use crate::tracker::structs::tracker_info::TrackerInfo;

/// Collects trackers before the registry is used. Registration is only
/// possible here, so the tracker set is fixed once built.
#[derive(Debug, Clone)]
pub struct TrackerRegistryBuilder {
    pub(crate) capacity: usize,
    pub(crate) trackers: Vec<Arc<TrackerInfo>>,
    pub(crate) maintenance: bool,
    pub(crate) poll_interval: Duration,
    pub(crate) connection_expiry: Duration,
    pub(crate) tracker_timeout: Duration,
}
