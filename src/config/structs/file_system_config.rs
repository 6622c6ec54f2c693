use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileSystemConfig {
    pub max_retries: u32,
    pub retry_wait_ms: u64,
    pub tracker_timeout_ms: u64,
    pub file_server_timeout_ms: u64,
    pub max_buffer_size: usize,
}
