use std::fs::File;

#[derive(Debug)]
pub struct FileSink<'a> {
    pub(crate) file: &'a mut File,
    /// Position the download started at.
    pub(crate) mark: u64,
}
