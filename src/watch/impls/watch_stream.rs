use std::io::{ErrorKind, Read, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use log::{debug, error, info};
use crate::tracker::structs::tracker_registry::TrackerRegistry;
use crate::watch::errors::WatchError;
use crate::watch::structs::watch_stream::WatchStream;
use crate::watch::structs::watch_switch::WatchSwitch;
use crate::watch::watch::{cache_payload, DEFAULT_MAX_LINE_LENGTH, WATCH_BUFFER_SIZE, WATCH_COMMAND, WATCH_CONNECT_TIMEOUT, WATCH_RETRY_WAIT, WATCH_SLEEP_SLICE};

impl WatchStream {
    pub fn new(registry: Arc<TrackerRegistry>, tracker_index: usize, client_id: Option<String>, switch: WatchSwitch) -> WatchStream {
        WatchStream {
            registry,
            tracker_index,
            client_id,
            switch,
            connection: None,
            buffer: vec![0u8; WATCH_BUFFER_SIZE],
            position: 0,
            filled: 0,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            retry_wait: WATCH_RETRY_WAIT,
        }
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> WatchStream {
        self.max_line_length = max_line_length;
        self
    }

    pub fn with_retry_wait(mut self, retry_wait: Duration) -> WatchStream {
        self.retry_wait = retry_wait;
        self
    }

    pub fn switch(&self) -> &WatchSwitch {
        &self.switch
    }

    pub fn tracker_index(&self) -> usize {
        self.tracker_index
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Next event line, without its line ending. Blocks until a line arrives
    /// or the switch is stopped; failures reconnect after `retry_wait`.
    pub fn next_line(&mut self) -> Result<String, WatchError> {
        while self.switch.is_enabled() {
            if self.connection.is_none() {
                self.connect();
            }
            if self.connection.is_some() {
                match self.read_line() {
                    Ok(line) => return Ok(line),
                    Err(WatchError::Stopped) => break,
                    Err(e) => {
                        error!("[WATCH] Failed to read line from tracker {}: {}", self.tracker_index, e);
                        self.disconnect();
                    }
                }
            }
            self.pause();
        }
        Err(WatchError::Stopped)
    }

    /// Next cache event payload raised by another client.
    pub fn next_cache_line(&mut self) -> Result<String, WatchError> {
        loop {
            let line = self.next_line()?;
            if let Some(payload) = cache_payload(&line, self.client_id.as_deref()) {
                return Ok(payload.to_string());
            }
        }
    }

    fn connect(&mut self) {
        let (mut connection, _) = match self.registry.get_connection(self.tracker_index, true, WATCH_CONNECT_TIMEOUT) {
            Some(connection) => connection,
            None => {
                debug!("[WATCH] No connection to tracker {}", self.tracker_index);
                return;
            }
        };
        if let Err(e) = connection.set_timeout(WATCH_CONNECT_TIMEOUT) {
            error!("[WATCH] Unable to set timeout on watch connection: {}", e);
        }
        if let Err(e) = connection.stream().write_all(WATCH_COMMAND) {
            error!("[WATCH] Failed to send !watch command: {}", e);
        }
        info!("[WATCH] Watching tracker {} ({})", self.tracker_index, connection.peer_address());
        self.position = 0;
        self.filled = 0;
        self.connection = Some(connection);
    }

    fn disconnect(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.destroy();
        }
        self.position = 0;
        self.filled = 0;
    }

    fn pause(&self) {
        let deadline = Instant::now() + self.retry_wait;
        while self.switch.is_enabled() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(WATCH_SLEEP_SLICE.min(deadline - now));
        }
    }

    fn read_line(&mut self) -> Result<String, WatchError> {
        let mut line: Vec<u8> = Vec::new();
        while self.switch.is_enabled() {
            if self.position >= self.filled {
                self.fill()?;
                continue;
            }
            let available = &self.buffer[self.position..self.filled];
            match available.iter().position(|byte| *byte == b'\n') {
                Some(end) => {
                    line.extend_from_slice(&available[..end]);
                    self.position += end + 1;
                    while self.position < self.filled && self.buffer[self.position] == 0 {
                        self.position += 1;
                    }
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                    if line.len() > self.max_line_length {
                        return Err(WatchError::LineTooLong(line.len()));
                    }
                    return Ok(String::from_utf8_lossy(&line).into_owned());
                }
                None => {
                    line.extend_from_slice(available);
                    self.position = self.filled;
                    if line.len() > self.max_line_length {
                        return Err(WatchError::LineTooLong(line.len()));
                    }
                }
            }
        }
        Err(WatchError::Stopped)
    }

    /// Refills the buffer. A read timeout leaves it empty for another try.
    fn fill(&mut self) -> Result<(), WatchError> {
        let connection = match self.connection.as_mut() {
            Some(connection) => connection,
            None => return Err(WatchError::NoConnection),
        };
        match connection.stream().read(&mut self.buffer) {
            Ok(0) => Err(WatchError::Io(std::io::Error::new(ErrorKind::UnexpectedEof, "tracker closed the watch connection"))),
            Ok(read) => {
                self.position = 0;
                self.filled = read;
                Ok(())
            }
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted) => Ok(()),
            Err(e) => Err(WatchError::Io(e)),
        }
    }
}
