use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use crate::file_system::enums::chunk::Chunk;
use crate::file_system::structs::chunk_stream::ChunkStream;

impl ChunkStream {
    pub fn new() -> ChunkStream {
        ChunkStream::default()
    }

    pub fn push(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    /// Drops every chunk after the first `length`.
    pub fn truncate(&mut self, length: usize) {
        self.chunks.truncate(length);
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn into_chunks(self) -> Vec<Chunk> {
        self.chunks
    }

    /// Byte length of all chunks together.
    pub fn total_length(&self) -> u64 {
        self.chunks.iter().map(|chunk| match chunk {
            Chunk::Memory(data) => data.len() as u64,
            Chunk::File { length, .. } => *length,
        }).sum()
    }

    /// Copies every chunk into `writer`, in order. File chunks are read from
    /// their start.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<u64> {
        let mut written = 0u64;
        for chunk in self.chunks.iter() {
            match chunk {
                Chunk::Memory(data) => {
                    writer.write_all(data)?;
                    written += data.len() as u64;
                }
                Chunk::File { file, length } => {
                    let mut handle: &File = file;
                    handle.seek(SeekFrom::Start(0))?;
                    let copied = io::copy(&mut handle.take(*length), writer)?;
                    if copied != *length {
                        return Err(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            format!("file chunk holds {copied} of {length} bytes"),
                        ));
                    }
                    written += copied;
                }
            }
        }
        Ok(written)
    }
}
