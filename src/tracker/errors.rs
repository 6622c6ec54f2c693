use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("Bad format: {0}")]
    BadFormat(String),

    #[error("No trackers available")]
    NoTrackersAvailable,

    #[error("Invalid tracker definition: {0}")]
    InvalidDefinition(String),

    #[error("Tracker capacity reached: {0}")]
    CapacityReached(usize),

    #[error("Unable to resolve tracker address: {0}")]
    AddressResolution(String),
}

impl TrackerError {
    /// Transport failures are worth retrying on another connection.
    pub fn is_transport(&self) -> bool {
        matches!(self, TrackerError::Transport(_))
    }
}
