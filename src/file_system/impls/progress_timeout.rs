use std::time::{Duration, Instant};
use log::error;
use crate::file_system::errors::FileSystemError;
use crate::file_system::structs::progress_timeout::ProgressTimeout;

const MIN_TICK: Duration = Duration::from_millis(10);
const MAX_TICK: Duration = Duration::from_millis(500);

impl ProgressTimeout {
    pub fn new(timeout: Duration) -> ProgressTimeout {
        Self::started_at(timeout, Instant::now())
    }

    pub fn started_at(timeout: Duration, start: Instant) -> ProgressTimeout {
        ProgressTimeout {
            start,
            last_progress: None,
            last_total: 0,
            timeout,
        }
    }

    /// How often a transfer should wake up to call `check`.
    pub fn tick(&self) -> Duration {
        (self.timeout / 4).clamp(MIN_TICK, MAX_TICK)
    }

    pub fn check(&mut self, total_bytes: u64, now: Instant) -> Result<(), FileSystemError> {
        if total_bytes > self.last_total {
            self.last_total = total_bytes;
            self.last_progress = Some(now);
            return Ok(());
        }
        match self.last_progress {
            None => {
                let elapsed = now.saturating_duration_since(self.start);
                if elapsed >= self.timeout * 2 {
                    error!("[FILESYSTEM] Timeout reached: inactive {} ms from connection start", elapsed.as_millis());
                    return Err(FileSystemError::Transfer(format!("no data within {} ms", elapsed.as_millis())));
                }
            }
            Some(last_progress) => {
                let elapsed = now.saturating_duration_since(last_progress);
                if elapsed >= self.timeout {
                    error!("[FILESYSTEM] Timeout reached: inactive {} ms from last data", elapsed.as_millis());
                    return Err(FileSystemError::Transfer(format!("stalled for {} ms after {} bytes", elapsed.as_millis(), self.last_total)));
                }
            }
        }
        Ok(())
    }
}
