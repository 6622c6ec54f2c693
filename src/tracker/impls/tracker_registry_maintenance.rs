use std::sync::{Arc, Weak};
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;
use log::{debug, error, info};
use crate::protocol::structs::request_parameters::RequestParameters;
use crate::tracker::structs::maintenance_signal::MaintenanceSignal;
use crate::tracker::structs::tracker_registry::TrackerRegistry;
use crate::tracker::tracker::{PING_DOMAIN, PING_KEY};

impl TrackerRegistry {
    pub fn start_maintenance(self: &Arc<Self>) {
        let mut maintenance_thread = self.maintenance_thread.lock();
        if maintenance_thread.is_some() {
            return;
        }
        *self.signal.running.lock() = true;

        let registry = Arc::downgrade(self);
        let signal = self.signal.clone();
        let poll_interval = self.poll_interval;
        match thread::Builder::new()
            .name(String::from("tracker-maintenance"))
            .spawn(move || maintenance_loop(registry, signal, poll_interval))
        {
            Ok(handle) => {
                *maintenance_thread = Some(handle);
            }
            Err(e) => {
                *self.signal.running.lock() = false;
                error!("[MAINTENANCE] Unable to start maintenance thread: {}", e);
            }
        }
    }

    /// Wakes the maintenance thread, tells it to stop and waits for it.
    pub fn stop_maintenance(&self) {
        {
            let mut running = self.signal.running.lock();
            *running = false;
            self.signal.condvar.notify_all();
        }
        let handle = self.maintenance_thread.lock().take();
        if let Some(handle) = handle {
            // The last reference may be dropped by the maintenance thread itself.
            if handle.thread().id() != thread::current().id() && handle.join().is_err() {
                error!("[MAINTENANCE] Maintenance thread panicked");
            }
        }
    }

    pub fn is_maintenance_running(&self) -> bool {
        let running = *self.signal.running.lock();
        running && self.maintenance_thread.lock().is_some()
    }

    pub fn run_maintenance_cycle(&self) {
        self.test_inactive_trackers();
        self.expire_active_trackers();
        self.check_count.fetch_add(1, Ordering::SeqCst);
    }

    /// Probes every inactive tracker with a throwaway `get_paths`. Any
    /// well-formed reply, `ERR` included, brings the tracker back.
    ///
    /// Returns the number of trackers activated.
    pub fn test_inactive_trackers(&self) -> usize {
        let inactive = match self.list_inactive() {
            Some(inactive) => inactive,
            None => return 0,
        };
        let mut params = RequestParameters::new();
        params.add("domain", PING_DOMAIN);
        params.add("key", PING_KEY);
        params.add("noverify", "1");

        let mut activated = 0;
        for index in inactive {
            let (mut connection, _) = match self.get_connection(index, true, self.tracker_timeout) {
                Some(connection) => connection,
                None => continue,
            };
            match connection.request("get_paths", &params, self.tracker_timeout) {
                Ok(_) => {
                    self.activate(index);
                    self.return_connection(connection);
                    activated += 1;
                }
                Err(e) => {
                    if let Some(tracker) = self.tracker(index) {
                        debug!("[MAINTENANCE] Tracker {} failed after connect, remaining inactive: {}", tracker, e);
                    }
                    connection.destroy();
                }
            }
        }
        activated
    }

    /// Closes idle connections past the expiry on every active tracker.
    /// Returns the number closed.
    pub fn expire_active_trackers(&self) -> usize {
        let active = match self.list_active() {
            Some(active) => active,
            None => return 0,
        };
        let mut expired = 0;
        for index in active {
            if let Some(pool) = self.pools.get(index) {
                expired += pool.expire(self.connection_expiry);
            }
        }
        if expired > 0 {
            debug!("[MAINTENANCE] Expired {} idle tracker connections", expired);
        }
        expired
    }
}

impl Drop for TrackerRegistry {
    fn drop(&mut self) {
        self.stop_maintenance();
    }
}

fn maintenance_loop(registry: Weak<TrackerRegistry>, signal: Arc<MaintenanceSignal>, poll_interval: Duration) {
    info!("[MAINTENANCE] Tracker maintenance started");
    loop {
        if !*signal.running.lock() {
            break;
        }
        match registry.upgrade() {
            Some(registry) => registry.run_maintenance_cycle(),
            None => break,
        }
        let mut running = signal.running.lock();
        if !*running {
            break;
        }
        signal.condvar.wait_for(&mut running, poll_interval);
    }
    info!("[MAINTENANCE] Tracker maintenance stopped");
}
