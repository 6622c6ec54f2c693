use std::io::{self, Seek, SeekFrom, Write};
use log::debug;
use crate::file_system::enums::chunk::Chunk;
use crate::file_system::structs::chunk_sink::ChunkSink;
use crate::file_system::structs::chunk_stream::ChunkStream;
use crate::file_system::traits::download_sink::DownloadSink;

impl<'a> ChunkSink<'a> {
    pub fn new(stream: &'a mut ChunkStream, max_buffer_size: usize) -> ChunkSink<'a> {
        let mark = stream.len();
        ChunkSink {
            stream,
            mark,
            buffered: 0,
            spill: None,
            spilled: 0,
            max_buffer_size,
        }
    }

    fn rollback(&mut self) {
        self.stream.truncate(self.mark);
        self.buffered = 0;
        self.spill = None;
        self.spilled = 0;
    }
}

impl DownloadSink for ChunkSink<'_> {
    fn begin(&mut self) -> io::Result<()> {
        self.rollback();
        Ok(())
    }

    fn append(&mut self, data: &[u8]) -> io::Result<()> {
        if self.spill.is_none() && self.buffered + data.len() > self.max_buffer_size {
            debug!("[DOWNLOAD] Chunk stream over {} bytes, continuing in a temp file", self.max_buffer_size);
            self.spill = Some(tempfile::tempfile()?);
        }
        match self.spill.as_mut() {
            Some(file) => {
                file.write_all(data)?;
                self.spilled += data.len() as u64;
            }
            None => {
                self.stream.push(Chunk::Memory(data.to_vec()));
                self.buffered += data.len();
            }
        }
        Ok(())
    }

    fn finish(&mut self, success: bool) -> io::Result<()> {
        if !success {
            self.rollback();
            return Ok(());
        }
        if let Some(mut file) = self.spill.take() {
            file.flush()?;
            file.seek(SeekFrom::Start(0))?;
            self.stream.push(Chunk::File {
                file,
                length: self.spilled,
            });
        }
        Ok(())
    }
}
