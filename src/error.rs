use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PongError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("could not create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a logger is already installed")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, PongError>;
