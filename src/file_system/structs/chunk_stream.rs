use crate::file_system::enums::chunk::Chunk;

/// Output assembled from memory and file chunks, in order.
#[derive(Debug, Default)]
pub struct ChunkStream {
    pub(crate) chunks: Vec<Chunk>,
}
