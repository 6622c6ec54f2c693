use std::time::{Duration, Instant};

/// Fails a transfer that stops moving bytes.
///
/// Before the first byte the limit is twice the timeout, counted from the
/// start. After that it is the timeout, counted from the last progress.
#[derive(Debug, Clone)]
pub struct ProgressTimeout {
    pub(crate) start: Instant,
    pub(crate) last_progress: Option<Instant>,
    pub(crate) last_total: u64,
    pub(crate) timeout: Duration,
}
