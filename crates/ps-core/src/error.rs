use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScrubError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ScrubError>;
