#[cfg(test)]
mod protocol_tests {
    mod encoding_tests {
        use crate::protocol::protocol::{url_decode, url_encode};

        #[test]
        fn test_url_encode_basic() {
            assert_eq!(url_encode("basic"), "basic");
            assert_eq!(url_encode("a space"), "a+space");
            assert_eq!(url_encode("amp&="), "amp%26%3D");
            assert_eq!(url_encode("amp&=").len(), 9);
        }

        #[test]
        fn test_url_encode_unreserved_passthrough() {
            assert_eq!(url_encode("a-b_c.d~e"), "a-b_c.d~e");
            assert_eq!(url_encode("/dir/file"), "%2Fdir%2Ffile");
        }

        #[test]
        fn test_url_encode_multibyte() {
            assert_eq!(url_encode("é"), "%C3%A9");
        }

        #[test]
        fn test_url_decode_either_case() {
            assert_eq!(url_decode("%3d%3D"), "==");
            assert_eq!(url_decode("Not+Good"), "Not Good");
        }

        #[test]
        fn test_url_decode_malformed_escape_kept() {
            assert_eq!(url_decode("100%"), "100%");
            assert_eq!(url_decode("%zz"), "%zz");
        }
    }

    mod request_tests {
        use crate::protocol::structs::request_parameters::RequestParameters;

        #[test]
        fn test_request_building() {
            let mut params = RequestParameters::new();
            params.add("key", "value");
            let request = params.build_request("TEST");
            assert_eq!(request, b"TEST key=value\r\n");
            assert_eq!(request.len(), 16);
            assert_eq!(params.encoded_len("TEST"), 16);

            params.add("key2", "value2");
            let request = params.build_request("TEST");
            assert_eq!(request, b"TEST key=value&key2=value2\r\n");
            assert_eq!(request.len(), 28);

            params.add("a&b", "c&d");
            let request = params.build_request("TEST");
            assert_eq!(request, b"TEST key=value&key2=value2&a%26b=c%26d\r\n");
            assert_eq!(request.len(), 40);
        }

        #[test]
        fn test_request_without_parameters() {
            let params = RequestParameters::new();
            assert_eq!(params.build_request("noop"), b"noop \r\n");
            assert_eq!(params.encoded_len("noop"), 7);
        }

        #[test]
        fn test_duplicate_keys_preserved() {
            let mut params = RequestParameters::new();
            params.add("k", "1").add("k", "2");
            assert_eq!(params.build_request("X"), b"X k=1&k=2\r\n");
            assert_eq!(params.len(), 2);
        }

        #[test]
        fn test_meta_data() {
            let mut meta = RequestParameters::new();
            meta.add_meta_data("meta1", "value1");
            meta.add_meta_data("meta2", "value2");

            let mut params = RequestParameters::new();
            params.add("key", "value");
            params.extend_from(&meta);

            let request = params.build_request("TEST");
            assert_eq!(
                String::from_utf8_lossy(&request),
                "TEST plugin.meta.keys=2&key=value&plugin.meta.key0=meta1&plugin.meta.value0=value1&plugin.meta.key1=meta2&plugin.meta.value1=value2\r\n"
            );
            assert_eq!(request.len(), 133);

            params.add_meta_data("meta3", "value3");
            let request = params.build_request("TEST");
            assert_eq!(
                String::from_utf8_lossy(&request),
                "TEST plugin.meta.keys=3&key=value&plugin.meta.key0=meta1&plugin.meta.value0=value1&plugin.meta.key1=meta2&plugin.meta.value1=value2&plugin.meta.key2=meta3&plugin.meta.value2=value3\r\n"
            );
            assert_eq!(request.len(), 182);
            assert_eq!(params.meta_count(), 3);
        }

        #[test]
        fn test_meta_index_width_counted() {
            let mut params = RequestParameters::new();
            for index in 0..12 {
                params.add_meta_data(&format!("m{index}"), "v");
            }
            let request = params.build_request("CMD");
            assert_eq!(request.len(), params.encoded_len("CMD"));
            assert!(String::from_utf8_lossy(&request).contains("plugin.meta.key11=m11&plugin.meta.value11=v\r\n"));
        }
    }

    mod response_tests {
        use std::io::Cursor;
        use crate::protocol::enums::tracker_response::TrackerResponse;
        use crate::protocol::protocol::{parse_response, read_response};
        use crate::tracker::errors::TrackerError;

        fn ok_values(raw: &str) -> TrackerResponse {
            parse_response(raw.as_bytes()).expect("response should parse")
        }

        #[test]
        fn test_ok_with_token() {
            let response = ok_values("OK 123 abc=def");
            assert_eq!(response.get("abc"), Some("def"));
        }

        #[test]
        fn test_ok_multiple_and_encoded() {
            let response = ok_values("OK 123 abc=def&x=%25a%26&aaa=bbb");
            assert_eq!(response.get("abc"), Some("def"));
            assert_eq!(response.get("x"), Some("%a&"));
            assert_eq!(response.get("aaa"), Some("bbb"));
        }

        #[test]
        fn test_ok_without_token() {
            let response = ok_values("OK abc=def&x=%25a%26&aaa=bbb");
            assert_eq!(response.get("x"), Some("%a&"));
        }

        #[test]
        fn test_ok_empty_value() {
            let response = ok_values("OK 123 abc=def&x=&aaa=bbb");
            assert_eq!(response.get("x"), Some(""));
        }

        #[test]
        fn test_ok_empty_with_terminator() {
            let response = ok_values("OK \r\n");
            assert_eq!(response, TrackerResponse::Ok(Default::default()));
        }

        #[test]
        fn test_corrupt_ok_responses() {
            for raw in ["OK 123 abc=def&x&aaa=bbb", "OK", "OK   ", "OK 123 ", "OK   \r\n", "OK 123 \r\n"] {
                let result = parse_response(raw.as_bytes());
                assert!(matches!(result, Err(TrackerError::BadFormat(_))), "{raw:?} should be malformed");
            }
        }

        #[test]
        fn test_err_responses() {
            let response = ok_values("ERR 123 this is the longer error");
            assert_eq!(response.error_code(), Some("123"));
            assert_eq!(response.error_message(), Some("this is the longer error"));

            let response = ok_values("ERR 123 sdfsd98%5E*%26%5EKJH)");
            assert_eq!(response.error_message(), Some("sdfsd98^*&^KJH)"));

            let response = ok_values("ERR unknown_key Not+Good\r\n");
            assert_eq!(response.error_code(), Some("unknown_key"));
            assert_eq!(response.error_message(), Some("Not Good"));
        }

        #[test]
        fn test_corrupt_err_responses() {
            for raw in ["ERR 123", "ERR ", "ERR      ", "ERR 123    ", "ERR"] {
                let result = parse_response(raw.as_bytes());
                assert!(matches!(result, Err(TrackerError::BadFormat(_))), "{raw:?} should be malformed");
            }
        }

        #[test]
        fn test_line_break_inside_response() {
            for raw in ["OK key=value\r\nOK other=1\r\n", "OK a=b\nc=d\r\n", "ERR unknown_key bad\rkey\r\n"] {
                let result = parse_response(raw.as_bytes());
                assert!(matches!(result, Err(TrackerError::BadFormat(_))), "{raw:?} should be malformed");
            }
        }

        #[test]
        fn test_unknown_prefix() {
            assert!(matches!(parse_response(b"HELLO world"), Err(TrackerError::BadFormat(_))));
        }

        #[test]
        fn test_read_response_single_chunk() {
            let mut reader = Cursor::new(b"OK 1 a=b\r\n".to_vec());
            let response = read_response(&mut reader).unwrap();
            assert_eq!(response, b"OK 1 a=b\r\n");
        }

        #[test]
        fn test_read_response_large() {
            let value = "x".repeat(10_000);
            let raw = format!("OK big={value}\r\n");
            let mut reader = Cursor::new(raw.clone().into_bytes());
            let response = read_response(&mut reader).unwrap();
            assert_eq!(response.len(), raw.len());
            assert_eq!(parse_response(&response).unwrap().get("big"), Some(value.as_str()));
        }

        #[test]
        fn test_read_response_bad_terminator() {
            let mut reader = Cursor::new(b"OK a=b\n".to_vec());
            assert!(matches!(read_response(&mut reader), Err(TrackerError::BadFormat(_))));
        }

        #[test]
        fn test_read_response_eof() {
            let mut reader = Cursor::new(b"OK a=b".to_vec());
            match read_response(&mut reader) {
                Err(TrackerError::Transport(error)) => assert_eq!(error.kind(), std::io::ErrorKind::UnexpectedEof),
                other => panic!("expected transport error, got {other:?}"),
            }
        }
    }

    mod property_tests {
        use proptest::prelude::*;
        use crate::protocol::protocol::{parse_parameter_list, url_decode, url_encode};
        use crate::protocol::structs::request_parameters::RequestParameters;

        proptest! {
            #[test]
            fn test_encode_decode_round_trip(input in "\\PC*") {
                prop_assert_eq!(url_decode(&url_encode(&input)), input);
            }

            #[test]
            fn test_request_pairs_round_trip(pairs in proptest::collection::btree_map("[a-z &=é%+]{1,8}", "\\PC{0,12}", 1..6)) {
                let mut params = RequestParameters::new();
                for (key, value) in pairs.iter() {
                    params.add(key, value);
                }
                let request = params.build_request("CMD");
                prop_assert_eq!(request.len(), params.encoded_len("CMD"));

                let body = &request[4..request.len() - 2];
                let parsed = parse_parameter_list(body).unwrap();
                prop_assert_eq!(parsed.len(), pairs.len());
                for (key, value) in parsed {
                    prop_assert_eq!(pairs.get(&url_decode(&key)), Some(&value));
                }
            }
        }
    }
}
