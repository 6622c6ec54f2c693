use serde::{Deserialize, Serialize};
use crate::config::structs::file_system_config::FileSystemConfig;
use crate::config::structs::maintenance_config::MaintenanceConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    /// `host:port[,host:port...]`
    pub trackers: String,
    pub client_id: Option<String>,
    pub file_system: FileSystemConfig,
    pub maintenance: MaintenanceConfig,
}
