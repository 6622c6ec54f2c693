use std::fs::File;

#[derive(Debug)]
pub enum Chunk {
    Memory(Vec<u8>),
    File {
        file: File,
        length: u64,
    },
}
