use std::fs::File;
use std::io::{Cursor, Seek, SeekFrom};
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::thread;
use chrono::{DateTime, Utc};
use log::{debug, error};
use reqwest::Url;
use crate::file_system::enums::upload_source::UploadSource;
use crate::file_system::errors::FileSystemError;
use crate::file_system::file_system::parse_storage_url;
use crate::file_system::impls::file_server::counted_body;
use crate::file_system::structs::mogile_file_system::MogileFileSystem;
use crate::file_system::structs::store_destination::StoreDestination;
use crate::protocol::structs::request_parameters::RequestParameters;

impl MogileFileSystem {
    /// One streaming PUT of `source` to `url`. Returns the byte count sent.
    pub fn file_server_put(&self, url: &Url, source: UploadSource<'_>) -> Result<u64, FileSystemError> {
        let file_server = self.get_file_server(url)?;
        let timeout = self.settings.file_server_timeout;
        let sent = Arc::new(AtomicU64::new(0));
        let (body, length) = {
            let _context = self.runtime.enter();
            match source {
                UploadSource::Bytes(bytes) => (counted_body(Cursor::new(bytes.to_vec()), sent.clone()), bytes.len() as u64),
                UploadSource::File(file) => {
                    let mut handle = file.try_clone()?;
                    handle.seek(SeekFrom::Start(0))?;
                    let length = handle.metadata()?.len();
                    (counted_body(tokio::fs::File::from_std(handle), sent.clone()), length)
                }
            }
        };
        self.runtime.block_on(file_server.put(url, body, length, &sent, timeout))?;
        Ok(length)
    }

    pub fn store_bytes(&self, domain: &str, key: &str, storage_class: &str, bytes: &[u8]) -> Result<(), FileSystemError> {
        self.store(domain, key, storage_class, UploadSource::Bytes(bytes), None, None)
    }

    /// Stores `bytes`, sending `extra_open` ahead of the `create_open`
    /// parameters and `extra_close` ahead of the `create_close` ones.
    pub fn store_bytes_ex(&self, domain: &str, key: &str, storage_class: &str, bytes: &[u8], extra_open: Option<&RequestParameters>, extra_close: Option<&RequestParameters>) -> Result<(), FileSystemError> {
        self.store(domain, key, storage_class, UploadSource::Bytes(bytes), extra_open, extra_close)
    }

    pub fn store_bytes_filepath(&self, domain: &str, key: &str, storage_class: &str, bytes: &[u8], mtime: DateTime<Utc>) -> Result<(), FileSystemError> {
        let extra_close = mtime_parameters(mtime);
        self.store(domain, key, storage_class, UploadSource::Bytes(bytes), None, Some(&extra_close))
    }

    /// Stores the whole of `file`, whatever its current position.
    pub fn store_file(&self, domain: &str, key: &str, storage_class: &str, file: &File) -> Result<(), FileSystemError> {
        self.store(domain, key, storage_class, UploadSource::File(file), None, None)
    }

    pub fn store_file_ex(&self, domain: &str, key: &str, storage_class: &str, file: &File, extra_open: Option<&RequestParameters>, extra_close: Option<&RequestParameters>) -> Result<(), FileSystemError> {
        self.store(domain, key, storage_class, UploadSource::File(file), extra_open, extra_close)
    }

    pub fn store_file_filepath(&self, domain: &str, key: &str, storage_class: &str, file: &File, mtime: DateTime<Utc>) -> Result<(), FileSystemError> {
        let extra_close = mtime_parameters(mtime);
        self.store(domain, key, storage_class, UploadSource::File(file), None, Some(&extra_close))
    }

    /// Runs up to `max_retries` attempts. An attempt after a successful
    /// `create_open` reuses its destination, the one after that asks the
    /// tracker again.
    fn store(&self, domain: &str, key: &str, storage_class: &str, source: UploadSource<'_>, extra_open: Option<&RequestParameters>, extra_close: Option<&RequestParameters>) -> Result<(), FileSystemError> {
        let mut open_params = RequestParameters::new();
        if let Some(extra_open) = extra_open {
            open_params.extend_from(extra_open);
        }
        open_params
            .add("domain", domain)
            .add("class", storage_class)
            .add("key", key);

        let mut destination: Option<StoreDestination> = None;
        let mut call_tracker = true;
        let mut attempt: u32 = 0;
        let mut result = Err(FileSystemError::General(format!("no upload attempts made for {key}")));
        while attempt < self.settings.max_retries {
            result = self.store_attempt(domain, key, source, &open_params, extra_close, &mut call_tracker, &mut destination, attempt);
            attempt += 1;
            match &result {
                Ok(()) => break,
                Err(FileSystemError::Io(e)) => {
                    error!("[UPLOAD] Local error reading upload source for {}: {}", key, e);
                    break;
                }
                Err(_) => {}
            }
            if attempt < self.settings.max_retries {
                thread::sleep(self.settings.retry_wait);
            }
        }
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn store_attempt(&self, domain: &str, key: &str, source: UploadSource<'_>, open_params: &RequestParameters, extra_close: Option<&RequestParameters>, call_tracker: &mut bool, destination: &mut Option<StoreDestination>, attempt: u32) -> Result<(), FileSystemError> {
        if *call_tracker {
            *destination = Some(self.create_open(open_params, key)?);
            *call_tracker = false;
        } else {
            *call_tracker = true;
        }
        let destination = match destination.as_ref() {
            Some(destination) => destination,
            None => return Err(FileSystemError::General(format!("no destination to store {key}"))),
        };

        let url = parse_storage_url(&destination.path)?;
        let size = match self.file_server_put(&url, source) {
            Ok(size) => size,
            Err(e) => {
                error!("[UPLOAD] Failed to put file to {}. Attempt count = {}", destination.path, attempt);
                return Err(e);
            }
        };
        debug!("[UPLOAD] Sent {} bytes of {} to {}", size, key, destination.path);

        let mut close_params = RequestParameters::new();
        if let Some(extra_close) = extra_close {
            close_params.extend_from(extra_close);
        }
        close_params
            .add("fid", &destination.fid)
            .add("devid", &destination.devid)
            .add("size", &size.to_string())
            .add("domain", domain)
            .add("path", &destination.path)
            .add("key", key);
        self.add_client_id(&mut close_params);
        self.tracker_ok("create_close", &close_params, key, &[])?;
        Ok(())
    }

    fn create_open(&self, params: &RequestParameters, key: &str) -> Result<StoreDestination, FileSystemError> {
        let values = self.tracker_ok("create_open", params, key, &[])?;
        let field = |name: &str| match values.get(name) {
            Some(value) => Ok(value.clone()),
            None => {
                error!("[UPLOAD] Successful create_open did not return a {}", name);
                Err(FileSystemError::General(format!("create_open did not return a {name}")))
            }
        };
        Ok(StoreDestination {
            path: field("path")?,
            fid: field("fid")?,
            devid: field("devid")?,
        })
    }
}

fn mtime_parameters(mtime: DateTime<Utc>) -> RequestParameters {
    let mut params = RequestParameters::new();
    params.add("mtime", &mtime.timestamp().to_string());
    params
}
