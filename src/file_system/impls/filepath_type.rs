use std::fmt;
use crate::file_system::enums::filepath_type::FilepathType;

impl FilepathType {
    /// `D` is a directory, `L` a symlink, anything else a file.
    pub fn from_code(code: &str) -> FilepathType {
        match code.as_bytes().first() {
            Some(b'D') => FilepathType::Directory,
            Some(b'L') => FilepathType::Symlink,
            _ => FilepathType::File,
        }
    }
}

impl fmt::Display for FilepathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilepathType::Directory => write!(f, "directory"),
            FilepathType::File => write!(f, "file"),
            FilepathType::Symlink => write!(f, "symlink"),
        }
    }
}
