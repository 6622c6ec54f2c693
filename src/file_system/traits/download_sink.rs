use std::io;

/// Receives the bytes of a download. One download may make several attempts
/// against different paths; the sink sees `begin`, any number of `append`
/// calls and `finish` for each of them.
pub trait DownloadSink {
    /// Resets the sink for a new attempt.
    fn begin(&mut self) -> io::Result<()>;

    fn append(&mut self, data: &[u8]) -> io::Result<()>;

    /// Ends the attempt. A failed attempt must leave no trace in the sink.
    fn finish(&mut self, success: bool) -> io::Result<()>;
}
