//! Error types for the logger

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log directory could not be created
    #[error("Failed to create log directory '{}': {source}", .path.display())]
    LogDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file could not be opened or appended to
    #[error("Failed to append to logfile '{}': {source}", .path.display())]
    FileAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Level index not present in the registry
    #[error("Unknown log level index: {0}")]
    UnknownLevel(usize),

    #[error("Invalid level name: '{0}'")]
    InvalidLevelName(String),

    #[error("Unknown colour: '{0}'")]
    UnknownColour(String),

    #[error("Unknown date type: '{0}'")]
    UnknownDateType(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a log directory error
    pub fn log_directory(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::LogDirectory {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a file append error
    pub fn file_append(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::FileAppend {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error came from a file sink
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            LoggerError::LogDirectory { .. } | LoggerError::FileAppend { .. }
        )
    }
}
