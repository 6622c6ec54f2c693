use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::{error, info, warn};
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::connection_pool::ConnectionPool;
use crate::tracker::structs::pooled_connection::PooledConnection;
use crate::tracker::structs::tracker_connection::TrackerConnection;
use crate::tracker::structs::tracker_info::TrackerInfo;
use crate::tracker::structs::tracker_list::TrackerList;
use crate::tracker::structs::tracker_registry::TrackerRegistry;
use crate::tracker::structs::tracker_registry_builder::TrackerRegistryBuilder;
use crate::tracker::tracker::parse_tracker_list;

impl TrackerRegistry {
    pub fn builder(capacity: usize) -> TrackerRegistryBuilder {
        TrackerRegistryBuilder::with_capacity(capacity)
    }

    /// Builds a registry from `host:port,host:port`.
    pub fn init_quick(definition: &str, maintenance: bool) -> Result<Arc<TrackerRegistry>, TrackerError> {
        let trackers = parse_tracker_list(definition)?;
        let mut builder = TrackerRegistryBuilder::with_capacity(trackers.len()).maintenance(maintenance);
        for (host, port) in trackers.iter() {
            builder.register(host, *port)?;
        }
        Ok(builder.build())
    }

    pub fn tracker_count(&self) -> usize {
        self.trackers.len()
    }

    pub fn tracker(&self, index: usize) -> Option<Arc<TrackerInfo>> {
        self.trackers.get(index).cloned()
    }

    pub fn pool(&self, index: usize) -> Option<&ConnectionPool> {
        self.pools.get(index)
    }

    pub fn tracker_timeout(&self) -> Duration {
        self.tracker_timeout
    }

    pub fn maintenance_enabled(&self) -> bool {
        self.maintenance_enabled
    }

    /// Number of finished maintenance cycles.
    pub fn check_count(&self) -> u64 {
        self.check_count.load(Ordering::SeqCst)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.partitions.read().active.contains(&index)
    }

    pub fn active_count(&self) -> usize {
        self.partitions.read().active.len()
    }

    pub fn inactive_count(&self) -> usize {
        self.partitions.read().inactive.len()
    }

    /// Moves a tracker to the active set. Repeated calls are harmless.
    pub fn activate(&self, index: usize) {
        let activated = {
            let mut partitions = self.partitions.write();
            let position = partitions.inactive.iter().position(|inactive| *inactive == index);
            match position {
                Some(position) => {
                    partitions.inactive.remove(position);
                    partitions.active.push(index);
                    true
                }
                None => false,
            }
        };
        if !activated {
            return;
        }
        if let Some(tracker) = self.trackers.get(index) {
            info!("[TRACKER] Tracker {} is now active", tracker);
        }
    }

    /// Moves a tracker to the inactive set and closes its pooled connections.
    /// Repeated calls are harmless.
    pub fn deactivate(&self, index: usize) {
        let removed = {
            let mut partitions = self.partitions.write();
            let position = partitions.active.iter().position(|active| *active == index);
            match position {
                Some(position) => {
                    partitions.active.remove(position);
                    partitions.inactive.push(index);
                    true
                }
                None => false,
            }
        };
        if !removed {
            return;
        }
        if let Some(tracker) = self.trackers.get(index) {
            warn!("[TRACKER] Tracker {} deactivated", tracker);
        }
        if let Some(pool) = self.pools.get(index) {
            for connection in pool.drain() {
                connection.destroy();
            }
        }
    }

    pub fn list_active(&self) -> Option<TrackerList> {
        let snapshot = self.partitions.read().active.clone();
        TrackerList::new(snapshot)
    }

    pub fn list_inactive(&self) -> Option<TrackerList> {
        let snapshot = self.partitions.read().inactive.clone();
        TrackerList::new(snapshot)
    }

    /// Hands out an idle connection, or opens a new one when the pool is empty
    /// and `create_new` is set. The flag in the result tells whether the
    /// connection is new.
    ///
    /// A failed connect deactivates the tracker and yields `None`.
    pub fn get_connection(&self, index: usize, create_new: bool, timeout: Duration) -> Option<(PooledConnection, bool)> {
        let pool = self.pools.get(index)?;
        if let Some(connection) = pool.pop() {
            return Some((connection, false));
        }
        if !create_new {
            return None;
        }
        let tracker = self.trackers.get(index)?;
        match TrackerConnection::connect(index, tracker, timeout) {
            Ok(connection) => Some((PooledConnection::new(connection), true)),
            Err(e) => {
                error!("[TRACKER] Unable to connect to tracker {}, deactivating: {}", tracker, e);
                self.deactivate(index);
                None
            }
        }
    }

    /// Puts a connection that completed a request back on top of its pool.
    /// A tracker deactivated meanwhile gets the connection closed instead.
    pub fn return_connection(&self, connection: PooledConnection) {
        let index = connection.tracker_index;
        match self.pools.get(index) {
            Some(pool) if self.is_active(index) => pool.release(connection),
            _ => connection.destroy(),
        }
    }
}
