use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;
use log::debug;
use crate::file_system::enums::download_content::DownloadContent;
use crate::file_system::structs::download::Download;
use crate::file_system::structs::memory_sink::MemorySink;
use crate::file_system::traits::download_sink::DownloadSink;

impl MemorySink {
    /// Buffers up to `max_buffer_size` bytes, then spills to `destination`
    /// or to an anonymous temp file.
    pub fn new(destination: Option<&Path>, max_buffer_size: usize) -> MemorySink {
        MemorySink {
            buffer: Vec::new(),
            file: None,
            destination: destination.map(Path::to_path_buf),
            max_buffer_size,
        }
    }

    pub fn is_spilled(&self) -> bool {
        self.file.is_some()
    }

    pub fn into_download(self, total_bytes: u64) -> Download {
        let content = match self.file {
            Some(file) => DownloadContent::File(file),
            None => DownloadContent::Bytes(self.buffer),
        };
        Download {
            total_bytes,
            content,
        }
    }

    fn spill(&mut self) -> io::Result<()> {
        let mut file = match &self.destination {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                debug!("[DOWNLOAD] Spilling download to {}", path.display());
                OpenOptions::new().read(true).write(true).create(true).truncate(true).open(path)?
            }
            None => {
                debug!("[DOWNLOAD] Spilling download to a temp file");
                tempfile::tempfile()?
            }
        };
        file.write_all(&self.buffer)?;
        self.buffer = Vec::new();
        self.file = Some(file);
        Ok(())
    }
}

impl DownloadSink for MemorySink {
    fn begin(&mut self) -> io::Result<()> {
        self.buffer.clear();
        if let Some(file) = self.file.as_mut() {
            reset(file)?;
        }
        Ok(())
    }

    fn append(&mut self, data: &[u8]) -> io::Result<()> {
        if self.file.is_none() && self.buffer.len() + data.len() > self.max_buffer_size {
            self.spill()?;
        }
        match self.file.as_mut() {
            Some(file) => file.write_all(data),
            None => {
                self.buffer.extend_from_slice(data);
                Ok(())
            }
        }
    }

    fn finish(&mut self, success: bool) -> io::Result<()> {
        if !success {
            self.buffer.clear();
        }
        match self.file.as_mut() {
            Some(file) if success => {
                file.flush()?;
                file.seek(SeekFrom::Start(0))?;
                Ok(())
            }
            Some(file) => reset(file),
            None => Ok(()),
        }
    }
}

fn reset(file: &mut File) -> io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    Ok(())
}
