use std::fs::File;

#[derive(Debug)]
pub enum DownloadContent {
    Bytes(Vec<u8>),
    /// Spilled content, positioned at the start.
    File(File),
}
