use std::fs::File;
use crate::file_system::structs::chunk_stream::ChunkStream;

#[derive(Debug)]
pub struct ChunkSink<'a> {
    pub(crate) stream: &'a mut ChunkStream,
    /// Chunk count before the download started.
    pub(crate) mark: usize,
    pub(crate) buffered: usize,
    pub(crate) spill: Option<File>,
    pub(crate) spilled: u64,
    pub(crate) max_buffer_size: usize,
}
