use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::watch::structs::watch_switch::WatchSwitch;

impl WatchSwitch {
    /// A switch that starts enabled.
    pub fn new() -> WatchSwitch {
        WatchSwitch {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl Default for WatchSwitch {
    fn default() -> Self {
        Self::new()
    }
}
