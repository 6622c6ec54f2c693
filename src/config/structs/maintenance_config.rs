use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceConfig {
    pub enabled: bool,
    pub poll_interval_secs: u64,
    pub connection_expire_secs: u64,
}
