use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use crate::file_system::structs::file_sink::FileSink;
use crate::file_system::traits::download_sink::DownloadSink;

impl<'a> FileSink<'a> {
    /// Marks the current position of `file`; downloads are written from there.
    pub fn new(file: &'a mut File) -> io::Result<FileSink<'a>> {
        let mark = file.stream_position()?;
        Ok(FileSink { file, mark })
    }

    pub fn mark(&self) -> u64 {
        self.mark
    }

    fn rollback(&mut self) -> io::Result<()> {
        self.file.set_len(self.mark)?;
        self.file.seek(SeekFrom::Start(self.mark))?;
        Ok(())
    }
}

impl DownloadSink for FileSink<'_> {
    fn begin(&mut self) -> io::Result<()> {
        self.rollback()
    }

    fn append(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    fn finish(&mut self, success: bool) -> io::Result<()> {
        if !success {
            return self.rollback();
        }
        self.file.flush()?;
        self.file.seek(SeekFrom::Start(self.mark))?;
        Ok(())
    }
}
