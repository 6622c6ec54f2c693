use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Duration;
use log::debug;
use parking_lot::{Mutex, RwLock};
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::connection_pool::ConnectionPool;
use crate::tracker::structs::maintenance_signal::MaintenanceSignal;
use crate::tracker::structs::tracker_info::TrackerInfo;
use crate::tracker::structs::tracker_partitions::TrackerPartitions;
use crate::tracker::structs::tracker_registry::TrackerRegistry;
use crate::tracker::structs::tracker_registry_builder::TrackerRegistryBuilder;
use crate::tracker::tracker::{DEFAULT_CONNECTION_EXPIRY, DEFAULT_POLL_INTERVAL, DEFAULT_TRACKER_TIMEOUT};

impl TrackerRegistryBuilder {
    pub fn with_capacity(capacity: usize) -> TrackerRegistryBuilder {
        TrackerRegistryBuilder {
            capacity,
            trackers: Vec::with_capacity(capacity),
            maintenance: true,
            poll_interval: DEFAULT_POLL_INTERVAL,
            connection_expiry: DEFAULT_CONNECTION_EXPIRY,
            tracker_timeout: DEFAULT_TRACKER_TIMEOUT,
        }
    }

    /// Whether `build` starts the maintenance thread.
    pub fn maintenance(mut self, enabled: bool) -> TrackerRegistryBuilder {
        self.maintenance = enabled;
        self
    }

    pub fn poll_interval(mut self, poll_interval: Duration) -> TrackerRegistryBuilder {
        self.poll_interval = poll_interval;
        self
    }

    pub fn connection_expiry(mut self, connection_expiry: Duration) -> TrackerRegistryBuilder {
        self.connection_expiry = connection_expiry;
        self
    }

    pub fn tracker_timeout(mut self, tracker_timeout: Duration) -> TrackerRegistryBuilder {
        self.tracker_timeout = tracker_timeout;
        self
    }

    /// Resolves and appends a tracker, returning its index.
    pub fn register(&mut self, address: &str, port: u16) -> Result<usize, TrackerError> {
        if self.trackers.len() >= self.capacity {
            return Err(TrackerError::CapacityReached(self.capacity));
        }
        let tracker = TrackerInfo::resolve(address, port)?;
        debug!("[TRACKER] Registered tracker {} as {}", tracker, tracker.socket_address);
        self.trackers.push(Arc::new(tracker));
        Ok(self.trackers.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    /// Every registered tracker starts active with an empty pool.
    pub fn build(self) -> Arc<TrackerRegistry> {
        let count = self.trackers.len();
        let registry = Arc::new(TrackerRegistry {
            pools: (0..count).map(|_| ConnectionPool::new()).collect(),
            partitions: RwLock::new(TrackerPartitions {
                active: (0..count).collect(),
                inactive: Vec::with_capacity(count),
            }),
            trackers: self.trackers,
            maintenance_enabled: self.maintenance,
            poll_interval: self.poll_interval,
            connection_expiry: self.connection_expiry,
            tracker_timeout: self.tracker_timeout,
            check_count: AtomicU64::new(0),
            signal: Arc::new(MaintenanceSignal::default()),
            maintenance_thread: Mutex::new(None),
        });
        if registry.maintenance_enabled {
            registry.start_maintenance();
        }
        registry
    }
}
