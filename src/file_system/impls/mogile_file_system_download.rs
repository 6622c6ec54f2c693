use std::fs::File;
use std::path::Path;
use log::{debug, error, warn};
use crate::file_system::errors::FileSystemError;
use crate::file_system::file_system::parse_storage_url;
use crate::file_system::structs::chunk_sink::ChunkSink;
use crate::file_system::structs::chunk_stream::ChunkStream;
use crate::file_system::structs::download::Download;
use crate::file_system::structs::file_sink::FileSink;
use crate::file_system::structs::memory_sink::MemorySink;
use crate::file_system::structs::mogile_file_system::MogileFileSystem;
use crate::file_system::traits::download_sink::DownloadSink;

impl MogileFileSystem {
    /// One GET of `url` into `sink`, without `begin` or `finish`.
    pub fn file_server_get(&self, url: &str, sink: &mut dyn DownloadSink) -> Result<u64, FileSystemError> {
        let url = parse_storage_url(url)?;
        let file_server = self.get_file_server(&url)?;
        let timeout = self.settings.file_server_timeout;
        self.runtime.block_on(file_server.get(&url, timeout, sink))
    }

    /// Fetches `key` into memory, spilling to `destination` (or a temp file)
    /// once it grows past `max_buffer_size`.
    pub fn get_file_or_bytes(&self, domain: &str, key: &str, destination: Option<&Path>, required_length: Option<u64>) -> Result<Download, FileSystemError> {
        let mut sink = MemorySink::new(destination, self.settings.max_buffer_size);
        let total_bytes = self.download(domain, key, &mut sink, required_length)?;
        Ok(sink.into_download(total_bytes))
    }

    /// Writes `key` into `file` from its current position, and leaves the
    /// file positioned there.
    pub fn get_file(&self, domain: &str, key: &str, file: &mut File, required_length: Option<u64>) -> Result<u64, FileSystemError> {
        let mut sink = FileSink::new(file)?;
        self.download(domain, key, &mut sink, required_length)
    }

    /// Appends `key` to `stream`.
    pub fn get_chunks(&self, domain: &str, key: &str, stream: &mut ChunkStream, required_length: Option<u64>) -> Result<u64, FileSystemError> {
        let mut sink = ChunkSink::new(stream, self.settings.max_buffer_size);
        self.download(domain, key, &mut sink, required_length)
    }

    fn download(&self, domain: &str, key: &str, sink: &mut dyn DownloadSink, required_length: Option<u64>) -> Result<u64, FileSystemError> {
        let paths = match self.get_paths(domain, key, true) {
            Ok(paths) => paths,
            Err(e) => {
                debug!("[DOWNLOAD] Unable to get paths for {}.{}: {}", domain, key, e);
                return Err(e);
            }
        };

        let path_count = paths.len();
        let mut last_error: Option<FileSystemError> = None;
        for (index, path) in paths.iter().enumerate() {
            let attempt = index + 1;
            sink.begin()?;
            let result = self.file_server_get(path, sink).and_then(|total_bytes| match required_length {
                Some(required) if required != total_bytes => {
                    error!("[DOWNLOAD] {}: length {} from {} does not match the required length {}. Attempt {}/{}", key, total_bytes, path, required, attempt, path_count);
                    Err(FileSystemError::Transfer(format!("{path} returned {total_bytes} bytes, {required} required")))
                }
                _ => Ok(total_bytes),
            });
            match result {
                Ok(total_bytes) => {
                    sink.finish(true)?;
                    if attempt > 1 {
                        warn!("[DOWNLOAD] Fetched {} from {}. Attempt {}/{}", key, path, attempt, path_count);
                    }
                    return Ok(total_bytes);
                }
                Err(e) => {
                    error!("[DOWNLOAD] {}: Failed to get file from {}. Attempt {}/{}: {}", key, path, attempt, path_count, e);
                    sink.finish(false)?;
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| FileSystemError::General(format!("no paths for {key}"))))
    }
}
