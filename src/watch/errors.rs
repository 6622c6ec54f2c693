use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Watching stopped")]
    Stopped,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No watch connection")]
    NoConnection,

    #[error("Watch line too long: {0} bytes")]
    LineTooLong(usize),
}
