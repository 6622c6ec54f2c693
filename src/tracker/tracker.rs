use std::time::Duration;
use crate::tracker::errors::TrackerError;

/// Connect and request timeout used by the maintenance probe.
pub const DEFAULT_TRACKER_TIMEOUT: Duration = Duration::from_secs(2);

/// Time between two maintenance cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Pooled connections idle for longer than this are closed by maintenance.
pub const DEFAULT_CONNECTION_EXPIRY: Duration = Duration::from_secs(60);

pub const PING_DOMAIN: &str = "ping_domain";
pub const PING_KEY: &str = "ping_key";

/// Parses `host:port[,host:port...]`. Blank entries are ignored; an entry
/// without a `:` or with a bad port is rejected.
pub fn parse_tracker_list(definition: &str) -> Result<Vec<(String, u16)>, TrackerError> {
    let mut trackers = Vec::new();
    for entry in definition.split(',').map(str::trim) {
        if entry.is_empty() {
            continue;
        }
        let (host, port) = match entry.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() => (host, port),
            _ => return Err(TrackerError::InvalidDefinition(entry.to_string())),
        };
        let port = match port.parse::<u16>() {
            Ok(port) => port,
            Err(_) => return Err(TrackerError::InvalidDefinition(entry.to_string())),
        };
        let host = host.trim_start_matches('[').trim_end_matches(']');
        trackers.push((host.to_string(), port));
    }
    if trackers.is_empty() {
        return Err(TrackerError::InvalidDefinition(definition.to_string()));
    }
    Ok(trackers)
}
