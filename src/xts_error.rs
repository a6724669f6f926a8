// Error types for the terminal front-end
// Losing or winning a game is a game phase, not an error; only I/O and setup failures land here

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[error("cannot install logger: {0}")]
    Logger(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type Result<T> = std::result::Result<T, SweepError>;
