use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Cloneable on/off flag. Every clone controls the same streams.
#[derive(Debug, Clone)]
pub struct WatchSwitch {
    pub(crate) enabled: Arc<AtomicBool>,
}
