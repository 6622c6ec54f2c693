use std::fs::File;

#[derive(Debug, Clone, Copy)]
pub enum UploadSource<'a> {
    Bytes(&'a [u8]),
    /// Sent from the start whatever its current position.
    File(&'a File),
}
