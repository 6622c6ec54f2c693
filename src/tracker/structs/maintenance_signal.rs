use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
pub struct MaintenanceSignal {
    pub(crate) running: Mutex<bool>,
    pub(crate) condvar: Condvar,
}
