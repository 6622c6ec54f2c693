mod common;

use std::io::Cursor;
use mogile_client::protocol::enums::tracker_response::TrackerResponse;
use mogile_client::protocol::protocol::{parse_response, read_response, url_decode, url_encode};
use mogile_client::protocol::structs::request_parameters::RequestParameters;
use mogile_client::tracker::errors::TrackerError;

#[test]
fn test_build_request_encodes_reserved_characters() {
    let mut params = RequestParameters::new();
    params.add("key", "value").add("key2", "value2").add("a&b", "c&d");

    let request = params.build_request("TEST");
    assert_eq!(request, b"TEST key=value&key2=value2&a%26b=c%26d\r\n".to_vec());
    assert_eq!(params.encoded_len("TEST"), request.len(), "Encoded length should match the built request");
}

#[test]
fn test_build_request_with_meta_data() {
    let mut params = RequestParameters::new();
    params.add("domain", "images");
    params.add_meta_data("colour", "deep blue");

    let request = String::from_utf8(params.build_request("create_open")).unwrap();
    assert!(request.starts_with("create_open plugin.meta.keys=1&domain=images&"), "Meta count should lead the pairs: {}", request);
    assert!(request.contains("plugin.meta.key0=colour"), "Meta key should be sent: {}", request);
    assert!(request.contains("plugin.meta.value0=deep+blue"), "Meta value should be encoded: {}", request);
    assert!(request.ends_with("\r\n"));
}

#[test]
fn test_url_codec_round_trip_on_paths() {
    let path = "http://10.0.0.5:7500/dev2/0/000/000/0000000123.fid";
    let encoded = url_encode(path);
    assert!(!encoded.contains(':'), "Colon should be escaped: {}", encoded);
    assert_eq!(url_decode(&encoded), path);
}

#[test]
fn test_parse_ok_response() {
    let response = parse_response(b"OK paths=1&path1=http%3A%2F%2Fhost%3A7500%2Fa.fid\r\n");
    assert!(response.is_ok(), "Should parse valid OK response");

    let response = response.unwrap();
    assert!(response.is_ok());
    assert_eq!(response.get("paths"), Some("1"));
    assert_eq!(response.get("path1"), Some("http://host:7500/a.fid"));
}

#[test]
fn test_parse_err_response() {
    let response = parse_response(b"ERR unknown_key unknown+key\r\n").expect("Should parse ERR response");
    match response {
        TrackerResponse::Err { ref code, ref message } => {
            assert_eq!(code, "unknown_key");
            assert_eq!(message, "unknown key");
        }
        _ => panic!("Expected an ERR response"),
    }
    assert_eq!(response.error_code(), Some("unknown_key"));
    assert!(response.values().is_none());
}

#[test]
fn test_parse_malformed_response() {
    let result = parse_response(b"HELLO world\r\n");
    assert!(matches!(result, Err(TrackerError::BadFormat(_))), "Unknown status should be a framing error");
}

#[test]
fn test_two_replies_in_one_read_are_malformed() {
    let mut reader = Cursor::new(b"OK key=value\r\nOK other=1\r\n".to_vec());
    let raw = read_response(&mut reader).expect("Should read up to the last line end");
    let result = parse_response(&raw);
    assert!(matches!(result, Err(TrackerError::BadFormat(_))), "Merged replies must not leak into values: {:?}", result);
}

#[test]
fn test_read_response_eof_is_transport_error() {
    let mut reader = Cursor::new(b"OK partial".to_vec());
    let result = read_response(&mut reader);
    assert!(matches!(result, Err(TrackerError::Transport(_))), "Truncated reply should be a transport error");
}
