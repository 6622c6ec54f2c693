use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::file_system::enums::filepath_type::FilepathType;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FilepathEntry {
    /// Set for directory listings, absent for path info.
    pub name: Option<String>,
    pub mtime: Option<DateTime<Utc>>,
    /// Server node id, -1 when the tracker did not send one.
    pub nid: i64,
    pub file_type: FilepathType,
    pub size: u64,
    /// Target of a symlink.
    pub link: Option<String>,
}
