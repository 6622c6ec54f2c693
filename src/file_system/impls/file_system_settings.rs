use std::time::Duration;
use crate::config::structs::configuration::Configuration;
use crate::file_system::structs::file_system_settings::FileSystemSettings;

impl Default for FileSystemSettings {
    fn default() -> Self {
        FileSystemSettings {
            max_retries: 2,
            retry_wait: Duration::from_secs(1),
            tracker_timeout: Duration::from_secs(2),
            file_server_timeout: Duration::from_secs(2),
            max_buffer_size: 100 * 1024,
            client_id: None,
        }
    }
}

impl From<&Configuration> for FileSystemSettings {
    fn from(config: &Configuration) -> Self {
        FileSystemSettings {
            max_retries: config.file_system.max_retries,
            retry_wait: Duration::from_millis(config.file_system.retry_wait_ms),
            tracker_timeout: Duration::from_millis(config.file_system.tracker_timeout_ms),
            file_server_timeout: Duration::from_millis(config.file_system.file_server_timeout_ms),
            max_buffer_size: config.file_system.max_buffer_size,
            client_id: config.client_id.clone().filter(|client_id| !client_id.is_empty()),
        }
    }
}
