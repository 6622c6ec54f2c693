use std::collections::HashMap;
use crate::protocol::enums::tracker_response::TrackerResponse;

impl TrackerResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, TrackerResponse::Ok(_))
    }

    /// Value of `key` in an `OK` reply.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            TrackerResponse::Ok(values) => values.get(key).map(String::as_str),
            TrackerResponse::Err { .. } => None,
        }
    }

    pub fn values(&self) -> Option<&HashMap<String, String>> {
        match self {
            TrackerResponse::Ok(values) => Some(values),
            TrackerResponse::Err { .. } => None,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            TrackerResponse::Ok(_) => None,
            TrackerResponse::Err { code, .. } => Some(code.as_str()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            TrackerResponse::Ok(_) => None,
            TrackerResponse::Err { message, .. } => Some(message.as_str()),
        }
    }
}
