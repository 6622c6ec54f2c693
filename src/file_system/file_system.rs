use std::time::Duration;
use log::error;
use reqwest::Url;
use crate::file_system::errors::FileSystemError;

/// `get_paths` must report fewer paths than this.
pub const MAX_ALLOWED_PATHS: usize = 100;

/// `list_directory` must report fewer entries than this.
pub const MAX_ALLOWED_DIRECTORY_ENTRIES: usize = 32000;

/// Size of the body chunks read from an upload source.
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Tracker error codes reported as a missing key or path.
pub const UNKNOWN_KEY: &str = "unknown_key";
pub const PATH_NOT_FOUND: &str = "path_not_found";

/// Idle keep-alive connections to a file server are closed after this.
pub const FILE_SERVER_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Idle keep-alive connections kept per file server.
pub const FILE_SERVER_MAX_IDLE: usize = 50;

/// Parses a storage url. A url without a host or path is rejected.
pub fn parse_storage_url(path: &str) -> Result<Url, FileSystemError> {
    let url = match Url::parse(path) {
        Ok(url) => url,
        Err(e) => {
            error!("[FILESYSTEM] Unable to parse url {}: {}", path, e);
            return Err(FileSystemError::InvalidUrl(format!("{path} ({e})")));
        }
    };
    if url.host_str().is_none() || url.path().is_empty() || url.cannot_be_a_base() {
        error!("[FILESYSTEM] Url {} has no host or path", path);
        return Err(FileSystemError::InvalidUrl(path.to_string()));
    }
    Ok(url)
}

/// `host:port` key identifying a file server.
pub fn origin_key(url: &Url) -> Result<String, FileSystemError> {
    match (url.host_str(), url.port_or_known_default()) {
        (Some(host), Some(port)) => Ok(format!("{host}:{port}")),
        _ => Err(FileSystemError::InvalidUrl(url.to_string())),
    }
}

/// Reads a leading, optionally signed, decimal number. Anything else yields 0.
pub fn parse_number(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits.bytes().position(|byte| !byte.is_ascii_digit()).unwrap_or(digits.len());
    let number = digits[..end].parse::<i64>().unwrap_or(0);
    if negative { -number } else { number }
}
