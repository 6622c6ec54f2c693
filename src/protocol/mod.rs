//! Tracker line protocol.
//!
//! Requests are a single line: a command, one space, and a list of
//! url-encoded `key=value` pairs joined with `&`, terminated by `\r\n`.
//! Replies are either `OK <pairs>` or `ERR <code> <message>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use mogile_client::protocol::structs::request_parameters::RequestParameters;
//!
//! let mut params = RequestParameters::new();
//! params.add("domain", "images");
//! params.add("key", "a b&c");
//! assert_eq!(params.build_request("get_paths"), b"get_paths domain=images&key=a+b%26c\r\n");
//! ```

/// Parameter list used to build a request line.
pub mod structs;

/// Parsed tracker replies.
pub mod enums;

/// Implementation blocks for protocol types.
pub mod impls;

/// Encoding, decoding and framing functions.
#[allow(clippy::module_inception)]
pub mod protocol;

/// Unit tests for the line protocol.
pub mod tests;
