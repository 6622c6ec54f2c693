use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use tokio::runtime::Runtime;
use crate::file_system::structs::file_server::FileServer;
use crate::file_system::structs::file_system_settings::FileSystemSettings;
use crate::tracker::structs::tracker_registry::TrackerRegistry;

pub struct MogileFileSystem {
    pub(crate) settings: FileSystemSettings,
    pub(crate) trackers: Option<Arc<TrackerRegistry>>,
    pub(crate) file_servers: RwLock<HashMap<String, Arc<FileServer>>>,
    pub(crate) runtime: Runtime,
}
