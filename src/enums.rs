use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the storage urls of a key.
    Paths {
        domain: String,
        key: String,
        /// Ask the tracker to verify the paths.
        #[arg(long)]
        verify: bool,
    },
    /// Download a key to a file or to stdout.
    Get {
        domain: String,
        key: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fail unless exactly this many bytes are returned.
        #[arg(long)]
        length: Option<u64>,
    },
    /// Upload a file under a key.
    Put {
        domain: String,
        key: String,
        file: PathBuf,
        #[arg(long, default_value = "default")]
        class: String,
        /// Send the file's modification time (filepath domains).
        #[arg(long)]
        mtime: bool,
    },
    /// Delete a key.
    Delete {
        domain: String,
        key: String,
    },
    /// Rename a key.
    Rename {
        domain: String,
        from: String,
        to: String,
        /// Rename a filepath node instead of a plain key.
        #[arg(long)]
        filepath: bool,
    },
    /// List a filepath directory as JSON.
    Ls {
        domain: String,
        directory: String,
    },
    /// Show filepath info as JSON.
    Info {
        domain: String,
        path: String,
    },
    /// Create a filepath directory.
    Mkdir {
        domain: String,
        directory: String,
    },
    /// Print tracker events until interrupted.
    Watch {
        /// Index of the tracker to watch.
        #[arg(long, default_value_t = 0)]
        tracker: usize,
        /// Only print cache events raised by other clients.
        #[arg(long)]
        cache: bool,
    },
}
