use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::thread::JoinHandle;
use std::time::Duration;
use parking_lot::{Mutex, RwLock};
use crate::tracker::structs::connection_pool::ConnectionPool;
use crate::tracker::structs::maintenance_signal::MaintenanceSignal;
use crate::tracker::structs::tracker_info::TrackerInfo;
use crate::tracker::structs::tracker_partitions::TrackerPartitions;

pub struct TrackerRegistry {
    pub(crate) trackers: Vec<Arc<TrackerInfo>>,
    pub(crate) pools: Vec<ConnectionPool>,
    pub(crate) partitions: RwLock<TrackerPartitions>,
    pub(crate) maintenance_enabled: bool,
    pub(crate) poll_interval: Duration,
    pub(crate) connection_expiry: Duration,
    pub(crate) tracker_timeout: Duration,
    pub(crate) check_count: AtomicU64,
    pub(crate) signal: Arc<MaintenanceSignal>,
    pub(crate) maintenance_thread: Mutex<Option<JoinHandle<()>>>,
}
