use std::fs::File;
use std::path::PathBuf;

#[derive(Debug)]
pub struct MemorySink {
    pub(crate) buffer: Vec<u8>,
    pub(crate) file: Option<File>,
    pub(crate) destination: Option<PathBuf>,
    pub(crate) max_buffer_size: usize,
}
