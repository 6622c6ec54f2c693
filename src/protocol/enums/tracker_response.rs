use std::collections::HashMap;

/// A tracker reply that was framed and parsed successfully.
///
/// An `Err` here is a well-formed refusal from the tracker, not a transport
/// or framing problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerResponse {
    Ok(HashMap<String, String>),
    Err {
        code: String,
        message: String,
    },
}
