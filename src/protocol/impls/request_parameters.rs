use crate::protocol::protocol::url_encode;
use crate::protocol::structs::request_parameters::RequestParameters;

const META_COUNT_KEY: &str = "plugin.meta.keys";
const META_KEY_PREFIX: &str = "plugin.meta.key";
const META_VALUE_PREFIX: &str = "plugin.meta.value";

impl RequestParameters {
    pub fn new() -> RequestParameters {
        RequestParameters::default()
    }

    /// Adds a pair. Both sides are url-encoded immediately.
    pub fn add(&mut self, key: &str, value: &str) -> &mut RequestParameters {
        let key = url_encode(key);
        let value = url_encode(value);
        self.parameters_length += key.len() + value.len() + 1;
        self.parameters.push((key, value));
        self
    }

    /// Stages a metadata pair. Metadata is numbered at build time, in the
    /// order it was added.
    pub fn add_meta_data(&mut self, key: &str, value: &str) -> &mut RequestParameters {
        self.meta_data.push((url_encode(key), url_encode(value)));
        self
    }

    /// Appends every pair and metadata entry of `other` after our own.
    pub fn extend_from(&mut self, other: &RequestParameters) -> &mut RequestParameters {
        self.parameters.extend(other.parameters.iter().cloned());
        self.parameters_length += other.parameters_length;
        self.meta_data.extend(other.meta_data.iter().cloned());
        self
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.meta_data.is_empty()
    }

    pub fn meta_count(&self) -> usize {
        self.meta_data.len()
    }

    /// Encoded pairs, in the order they will be sent (metadata excluded).
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Exact byte length of `build_request(command)`.
    pub fn encoded_len(&self, command: &str) -> usize {
        let mut length = command.len() + 1 + self.parameters_length + self.meta_pairs_length() + 2;
        if !self.meta_data.is_empty() {
            length += META_COUNT_KEY.len() + 1 + decimal_digits(self.meta_data.len()) + 1;
        }
        let pairs = self.parameters.len() + self.meta_data.len() * 2;
        if pairs > 1 {
            length += pairs - 1;
        }
        length
    }

    /// Serializes `<command> <pairs>\r\n` into a buffer allocated once.
    pub fn build_request(&self, command: &str) -> Vec<u8> {
        let capacity = self.encoded_len(command);
        let mut request = Vec::with_capacity(capacity);
        request.extend_from_slice(command.as_bytes());
        request.push(b' ');

        if !self.meta_data.is_empty() {
            request.extend_from_slice(META_COUNT_KEY.as_bytes());
            request.push(b'=');
            request.extend_from_slice(self.meta_data.len().to_string().as_bytes());
            request.push(b'&');
        }

        let mut first = true;
        for (key, value) in self.parameters.iter() {
            push_pair(&mut request, &mut first, key.as_bytes(), value.as_bytes());
        }
        for (index, (key, value)) in self.meta_data.iter().enumerate() {
            let meta_key = format!("{META_KEY_PREFIX}{index}");
            let meta_value = format!("{META_VALUE_PREFIX}{index}");
            push_pair(&mut request, &mut first, meta_key.as_bytes(), key.as_bytes());
            push_pair(&mut request, &mut first, meta_value.as_bytes(), value.as_bytes());
        }

        request.extend_from_slice(b"\r\n");
        debug_assert_eq!(request.len(), capacity);
        request
    }

    fn meta_pairs_length(&self) -> usize {
        self.meta_data
            .iter()
            .enumerate()
            .map(|(index, (key, value))| {
                let digits = decimal_digits(index);
                META_KEY_PREFIX.len() + digits + key.len() + 1
                    + META_VALUE_PREFIX.len() + digits + value.len() + 1
            })
            .sum()
    }
}

fn push_pair(request: &mut Vec<u8>, first: &mut bool, key: &[u8], value: &[u8]) {
    if !*first {
        request.push(b'&');
    }
    *first = false;
    request.extend_from_slice(key);
    request.push(b'=');
    request.extend_from_slice(value);
}

fn decimal_digits(mut value: usize) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}
