mod common;

use std::time::{Duration, Instant};
use mogile_client::protocol::structs::request_parameters::RequestParameters;
use mogile_client::request::request::request_do;
use mogile_client::tracker::errors::TrackerError;

const TIMEOUT: Duration = Duration::from_secs(1);

fn params() -> RequestParameters {
    let mut params = RequestParameters::new();
    params.add("domain", "images").add("key", "logo");
    params
}

#[test]
fn test_request_retries_stale_pooled_connection() {
    let tracker = common::TestTrackerServer::start_single_shot(|_| Some("OK answer=42\r\n".to_string()));
    let registry = common::create_registry(&tracker.address());

    let first = request_do(&registry, "noop", &params(), TIMEOUT);
    assert!(first.is_ok(), "First request should succeed: {:?}", first);
    assert_eq!(registry.pool(0).unwrap().len(), 1, "Connection should be pooled after success");

    let second = request_do(&registry, "noop", &params(), TIMEOUT).expect("Stale connection should be replaced");
    assert_eq!(second.get("answer"), Some("42"));
    assert_eq!(tracker.count("noop"), 2);
    assert!(registry.is_active(0), "A stale connection should not deactivate the tracker");
}

#[test]
fn test_request_fails_over_to_next_tracker() {
    let tracker = common::TestTrackerServer::start(|_| Some("OK from=second\r\n".to_string()));
    let definition = format!("127.0.0.1:{},{}", common::closed_port(), tracker.address());
    let registry = common::create_registry(&definition);

    let response = request_do(&registry, "noop", &params(), TIMEOUT).expect("Second tracker should answer");
    assert_eq!(response.get("from"), Some("second"));
    assert!(registry.is_active(1));
    assert!(registry.active_count() >= 1);
}

#[test]
fn test_request_moves_on_when_new_connection_is_dropped() {
    let silent = common::TestTrackerServer::start(|_| None);
    let tracker = common::TestTrackerServer::start(|_| Some("OK from=second\r\n".to_string()));
    let registry = common::create_registry(&format!("{},{}", silent.address(), tracker.address()));

    let response = request_do(&registry, "noop", &params(), TIMEOUT).expect("Second tracker should answer");
    assert_eq!(response.get("from"), Some("second"));
    assert!(silent.count("noop") <= 1, "Silent tracker should be tried at most once");
    assert!(registry.is_active(0), "Only connect failures deactivate a tracker");
}

#[test]
fn test_request_returns_tracker_errors_as_responses() {
    let tracker = common::TestTrackerServer::start(|_| Some("ERR unknown_key unknown_key\r\n".to_string()));
    let registry = common::create_registry(&tracker.address());

    let response = request_do(&registry, "get_paths", &params(), TIMEOUT).expect("ERR is a valid reply");
    assert!(!response.is_ok());
    assert_eq!(response.error_code(), Some("unknown_key"));
}

#[test]
fn test_request_malformed_reply_is_not_retried() {
    let broken = common::TestTrackerServer::start(|_| Some("WHAT is this\r\n".to_string()));
    let registry = common::create_registry(&broken.address());

    let result = request_do(&registry, "noop", &params(), TIMEOUT);
    assert!(matches!(result, Err(TrackerError::BadFormat(_))), "Framing errors should surface at once");
    assert_eq!(broken.count("noop"), 1, "Malformed replies should not be retried");
    assert!(registry.pool(0).unwrap().is_empty(), "Connection with a malformed reply should be closed");
    assert!(registry.is_active(0));
}

#[test]
fn test_request_without_reachable_trackers() {
    let definition = format!("127.0.0.1:{},127.0.0.1:{}", common::closed_port(), common::closed_port());
    let registry = common::create_registry(&definition);

    let started = Instant::now();
    let result = request_do(&registry, "noop", &params(), TIMEOUT);
    assert!(matches!(result, Err(TrackerError::NoTrackersAvailable)), "Got {:?}", result);
    assert!(started.elapsed() < TIMEOUT * 2, "Refused connects should fail fast");
    assert_eq!(registry.active_count(), 0);

    let result = request_do(&registry, "noop", &params(), TIMEOUT);
    assert!(matches!(result, Err(TrackerError::NoTrackersAvailable)));
}
