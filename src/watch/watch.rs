use std::time::Duration;

/// Size of the socket read buffer.
pub const WATCH_BUFFER_SIZE: usize = 5000;

/// Lines longer than this are dropped together with the connection.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

pub const WATCH_COMMAND: &[u8] = b"!watch\r\n";

pub const WATCH_CONNECT_TIMEOUT: Duration = Duration::from_millis(250);

/// Pause between reconnect attempts.
pub const WATCH_RETRY_WAIT: Duration = Duration::from_secs(1);

/// Pauses are slept in slices of this length so a stop is noticed quickly.
pub const WATCH_SLEEP_SLICE: Duration = Duration::from_millis(50);

pub const CACHE_MARKER: &str = "[cache][";

/// Returns the payload of a `[cache][<id>] <payload>` line, or `None` when
/// the line is not a cache event or `<id>` is `client_id`.
pub fn cache_payload<'a>(line: &'a str, client_id: Option<&str>) -> Option<&'a str> {
    let start = line.find(CACHE_MARKER)? + CACHE_MARKER.len();
    let rest = &line[start..];
    let id_end = rest.find([']', ' ']).unwrap_or(rest.len());
    if client_id == Some(&rest[..id_end]) {
        return None;
    }
    Some(rest.get(id_end + 2..).unwrap_or(""))
}
