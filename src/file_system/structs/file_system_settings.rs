use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemSettings {
    /// Upload attempts, each being an optional `create_open`, a PUT and a `create_close`.
    pub max_retries: u32,
    pub retry_wait: Duration,
    pub tracker_timeout: Duration,
    /// Connect timeout and stall limit for file server transfers.
    pub file_server_timeout: Duration,
    /// In-memory download limit before spilling to a file.
    pub max_buffer_size: usize,
    /// Sent with mutating tracker commands.
    pub client_id: Option<String>,
}
