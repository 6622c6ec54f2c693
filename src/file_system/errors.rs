use thiserror::Error;
use crate::tracker::errors::TrackerError;

#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("General error: {0}")]
    General(String),

    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),

    #[error("Transfer error: {0}")]
    Transfer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),
}

impl FileSystemError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FileSystemError::NotFound(_))
    }

    pub fn is_no_trackers(&self) -> bool {
        matches!(self, FileSystemError::Tracker(TrackerError::NoTrackersAvailable))
    }
}
