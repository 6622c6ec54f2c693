use std::future::Future;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use futures_util::stream;
use log::{debug, error};
use reqwest::header::CONTENT_LENGTH;
use reqwest::{Body, Client, Url};
use tokio::io::{AsyncRead, AsyncReadExt};
use crate::file_system::errors::FileSystemError;
use crate::file_system::file_system::{FILE_SERVER_IDLE_TIMEOUT, FILE_SERVER_MAX_IDLE, UPLOAD_CHUNK_SIZE};
use crate::file_system::structs::file_server::FileServer;
use crate::file_system::structs::progress_timeout::ProgressTimeout;
use crate::file_system::traits::download_sink::DownloadSink;

impl FileServer {
    pub fn new(origin: &str, connect_timeout: Duration) -> Result<FileServer, FileSystemError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .pool_idle_timeout(FILE_SERVER_IDLE_TIMEOUT)
            .pool_max_idle_per_host(FILE_SERVER_MAX_IDLE)
            .build()
            .map_err(|e| {
                error!("[FILESYSTEM] Unable to create http client for {}: {}", origin, e);
                FileSystemError::Transfer(format!("unable to create http client for {origin}: {e}"))
            })?;
        debug!("[FILESYSTEM] Created file server client for {}", origin);
        Ok(FileServer {
            origin: origin.to_string(),
            client,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Streams the body of `url` into `sink` and returns the byte count.
    ///
    /// The sink only sees `append`; the caller owns `begin` and `finish`.
    pub async fn get(&self, url: &Url, timeout: Duration, sink: &mut dyn DownloadSink) -> Result<u64, FileSystemError> {
        let mut progress = ProgressTimeout::new(timeout);
        let mut total: u64 = 0;

        let response = match with_progress(self.client.get(url.clone()).send(), &mut progress, || 0).await? {
            Ok(response) => response,
            Err(e) => {
                error!("[DOWNLOAD] Error downloading {}: {}", url, e);
                return Err(FileSystemError::Transfer(format!("GET {url}: {e}")));
            }
        };
        let status = response.status();
        if !status.is_success() {
            error!("[DOWNLOAD] Error downloading {}: status {}", url, status);
            return Err(FileSystemError::Transfer(format!("GET {url}: status {status}")));
        }

        let mut response = response;
        loop {
            let current = total;
            let chunk = match with_progress(response.chunk(), &mut progress, || current).await? {
                Ok(chunk) => chunk,
                Err(e) => {
                    error!("[DOWNLOAD] Error reading body of {} after {} bytes: {}", url, total, e);
                    return Err(FileSystemError::Transfer(format!("GET {url}: {e}")));
                }
            };
            match chunk {
                Some(bytes) => {
                    sink.append(&bytes)?;
                    total += bytes.len() as u64;
                    progress.check(total, Instant::now())?;
                }
                None => break,
            }
        }
        Ok(total)
    }

    /// Sends `body` with an explicit `Content-Length`. `sent` is the counter
    /// the body advances, used to detect a stalled upload.
    pub async fn put(&self, url: &Url, body: Body, length: u64, sent: &AtomicU64, timeout: Duration) -> Result<(), FileSystemError> {
        let mut progress = ProgressTimeout::new(timeout);
        let request = self.client
            .put(url.clone())
            .header(CONTENT_LENGTH, length)
            .body(body)
            .send();

        let response = match with_progress(request, &mut progress, || sent.load(Ordering::SeqCst)).await? {
            Ok(response) => response,
            Err(e) => {
                error!("[UPLOAD] Error uploading to {}: {}", url, e);
                return Err(FileSystemError::Transfer(format!("PUT {url}: {e}")));
            }
        };
        let status = response.status();
        if !status.is_success() {
            error!("[UPLOAD] Error uploading to {}: status {}", url, status);
            return Err(FileSystemError::Transfer(format!("PUT {url}: status {status}")));
        }
        Ok(())
    }
}

/// Wraps a reader into a request body read in `UPLOAD_CHUNK_SIZE` pieces,
/// adding every piece to `counter`.
pub fn counted_body<R>(reader: R, counter: Arc<AtomicU64>) -> Body
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let chunks = stream::unfold((reader, counter, false), |(mut reader, counter, failed)| async move {
        if failed {
            return None;
        }
        let mut buffer = vec![0u8; UPLOAD_CHUNK_SIZE];
        match reader.read(&mut buffer).await {
            Ok(0) => None,
            Ok(read) => {
                buffer.truncate(read);
                counter.fetch_add(read as u64, Ordering::SeqCst);
                Some((Ok::<Vec<u8>, io::Error>(buffer), (reader, counter, false)))
            }
            Err(e) => {
                error!("[UPLOAD] Error reading upload source: {}", e);
                Some((Err(e), (reader, counter, true)))
            }
        }
    });
    Body::wrap_stream(chunks)
}

/// Polls `future` in ticks, checking `progress` against `total()` on every
/// tick that produced nothing.
async fn with_progress<F, T>(future: F, progress: &mut ProgressTimeout, total: T) -> Result<F::Output, FileSystemError>
where
    F: Future,
    T: Fn() -> u64,
{
    tokio::pin!(future);
    loop {
        match tokio::time::timeout(progress.tick(), &mut future).await {
            Ok(output) => return Ok(output),
            Err(_) => progress.check(total(), Instant::now())?,
        }
    }
}
