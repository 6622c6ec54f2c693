use std::collections::HashMap;
use std::io::{self, ErrorKind, Read};
use percent_encoding::{percent_decode, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use crate::protocol::enums::tracker_response::TrackerResponse;
use crate::tracker::errors::TrackerError;

/// Socket read size used while collecting a reply.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Bytes that pass through `url_encode` unchanged besides ASCII alphanumerics.
const TRACKER_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encodes a key or value for a request line: space becomes `+`, every byte
/// outside `[A-Za-z0-9-_.~]` becomes `%XX`.
pub fn url_encode(input: &str) -> String {
    input
        .split(' ')
        .map(|part| utf8_percent_encode(part, TRACKER_ENCODE_SET).to_string())
        .collect::<Vec<String>>()
        .join("+")
}

pub fn url_decode(input: &str) -> String {
    url_decode_bytes(input.as_bytes())
}

/// `+` becomes a space, `%XX` is decoded in either hex case, and malformed
/// escapes are kept verbatim.
pub fn url_decode_bytes(input: &[u8]) -> String {
    let plus_decoded: Vec<u8> = input
        .iter()
        .map(|byte| if *byte == b'+' { b' ' } else { *byte })
        .collect();
    percent_decode(&plus_decoded).decode_utf8_lossy().into_owned()
}

/// Reads one reply from the tracker, including its `\r\n` terminator.
///
/// Reads continue until a read ends on `\n`; the reply is then required to end
/// with `\r\n`.
pub fn read_response<R: Read>(reader: &mut R) -> Result<Vec<u8>, TrackerError> {
    let mut response: Vec<u8> = Vec::with_capacity(READ_BUFFER_SIZE);
    loop {
        let filled = response.len();
        response.resize(filled + READ_BUFFER_SIZE, 0);
        let read = match reader.read(&mut response[filled..]) {
            Ok(read) => read,
            Err(error) if error.kind() == ErrorKind::Interrupted => {
                response.truncate(filled);
                continue;
            }
            Err(error) => return Err(TrackerError::Transport(error)),
        };
        response.truncate(filled + read);
        if read == 0 {
            return Err(TrackerError::Transport(io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("zero sized reply after {filled} bytes"),
            )));
        }
        if response.last() == Some(&b'\n') {
            break;
        }
    }

    if !response.ends_with(b"\r\n") {
        return Err(TrackerError::BadFormat(String::from("invalid response terminator")));
    }
    Ok(response)
}

/// Parses `OK [token] k=v&...` or `ERR <code> <message>`.
///
/// The trailing `\r\n` may be present or absent, but no other line break may
/// appear. After `OK ` any run of spaces and digits is skipped; a reply that
/// is nothing but that run is malformed, while `OK \r\n` is an empty success.
pub fn parse_response(response: &[u8]) -> Result<TrackerResponse, TrackerError> {
    if response.len() < 4 {
        return Err(TrackerError::BadFormat(format!("invalid response length ({})", response.len())));
    }
    if strip_terminator(response).iter().any(|byte| *byte == b'\r' || *byte == b'\n') {
        return Err(TrackerError::BadFormat(String::from("line break inside response")));
    }

    if response.starts_with(b"OK ") {
        let rest = strip_terminator(&response[3..]);
        if rest.is_empty() {
            return Ok(TrackerResponse::Ok(HashMap::new()));
        }
        let start = match rest.iter().position(|byte| *byte != b' ' && !byte.is_ascii_digit()) {
            Some(start) => start,
            None => return Err(TrackerError::BadFormat(String::from("OK response without parameters"))),
        };
        return parse_parameter_list(&rest[start..]).map(TrackerResponse::Ok);
    }

    if response.len() > 4 && response.starts_with(b"ERR ") {
        let rest = strip_terminator(&response[4..]);
        let rest = match skip_spaces(rest) {
            Some(rest) => rest,
            None => return Err(TrackerError::BadFormat(String::from("only spaces after ERR"))),
        };
        let code_end = match rest.iter().position(|byte| *byte == b' ') {
            Some(code_end) => code_end,
            None => return Err(TrackerError::BadFormat(String::from("no space after error code"))),
        };
        let code = url_decode_bytes(&rest[..code_end]);
        let message = match skip_spaces(&rest[code_end + 1..]) {
            Some(message) => url_decode_bytes(message),
            None => return Err(TrackerError::BadFormat(String::from("only spaces after error code"))),
        };
        return Ok(TrackerResponse::Err { code, message });
    }

    Err(TrackerError::BadFormat(format!(
        "unknown response: {}",
        String::from_utf8_lossy(strip_terminator(response))
    )))
}

/// Splits `k=v&k=v` into a map. Keys are kept as sent, values are decoded,
/// and empty values are allowed.
pub fn parse_parameter_list(list: &[u8]) -> Result<HashMap<String, String>, TrackerError> {
    let mut values = HashMap::new();
    for pair in list.split(|byte| *byte == b'&') {
        if pair.is_empty() {
            continue;
        }
        let separator = match pair.iter().position(|byte| *byte == b'=') {
            Some(separator) => separator,
            None => {
                return Err(TrackerError::BadFormat(format!(
                    "parameter without '=': {}",
                    String::from_utf8_lossy(pair)
                )));
            }
        };
        let key = String::from_utf8_lossy(&pair[..separator]).into_owned();
        values.insert(key, url_decode_bytes(&pair[separator + 1..]));
    }
    Ok(values)
}

fn strip_terminator(data: &[u8]) -> &[u8] {
    data.strip_suffix(b"\r\n").unwrap_or(data)
}

fn skip_spaces(data: &[u8]) -> Option<&[u8]> {
    data.iter().position(|byte| *byte != b' ').map(|start| &data[start..])
}
