use std::time::Duration;
use log::{debug, error};
use crate::protocol::enums::tracker_response::TrackerResponse;
use crate::protocol::structs::request_parameters::RequestParameters;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::tracker_registry::TrackerRegistry;

/// Runs `action` against the first active tracker that answers.
///
/// For each tracker in the ring:
/// - a pooled connection that fails with a transport error is dropped and the
///   same tracker is tried again;
/// - a failure on a new connection moves on to the next tracker;
/// - a connect failure moves on as well (the registry has deactivated it);
/// - a malformed reply is returned at once.
///
/// Exhausting the ring yields the last transport error, or
/// `NoTrackersAvailable` when no request could be sent at all.
pub fn request_do(registry: &TrackerRegistry, action: &str, params: &RequestParameters, timeout: Duration) -> Result<TrackerResponse, TrackerError> {
    let active = match registry.list_active() {
        Some(active) => active,
        None => {
            error!("[REQUEST] Unable to get an active tracker for '{}'", action);
            return Err(TrackerError::NoTrackersAvailable);
        }
    };

    let mut last_error: Option<TrackerError> = None;
    for index in active {
        loop {
            let (mut connection, is_new) = match registry.get_connection(index, true, timeout) {
                Some(connection) => connection,
                None => break,
            };
            match connection.request(action, params, timeout) {
                Ok(response) => {
                    registry.return_connection(connection);
                    return Ok(response);
                }
                Err(TrackerError::BadFormat(message)) => {
                    error!("[REQUEST] Malformed reply to '{}' from tracker {}: {}", action, connection.peer_address(), message);
                    connection.destroy();
                    return Err(TrackerError::BadFormat(message));
                }
                Err(e) => {
                    if is_new {
                        error!("[REQUEST] '{}' failed on new connection to {}: {}", action, connection.peer_address(), e);
                    } else {
                        debug!("[REQUEST] '{}' failed on pooled connection to {}, retrying: {}", action, connection.peer_address(), e);
                    }
                    connection.destroy();
                    last_error = Some(e);
                    if is_new {
                        break;
                    }
                }
            }
        }
    }

    Err(last_error.unwrap_or(TrackerError::NoTrackersAvailable))
}
