//! Error types for logger construction and emission

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log directory could not be created
    #[error("failed to create log directory {}: {source}", path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to resolve the current working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    /// Appending to the day's log file failed
    #[error("failed to append to log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to console: {0}")]
    Console(#[source] io::Error),

    /// A message value could not be converted to structured data
    #[error("failed to serialize log message: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid log level '{0}' (expected error, warn, info or debug)")]
    InvalidLevel(String),

    #[error("failed to load logger options from {}: {reason}", path.display())]
    InvalidOptions { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_names_path() {
        let err = LoggerError::Write {
            path: PathBuf::from("/var/log/app/2026-01-03.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("2026-01-03.log"));
        assert!(text.contains("denied"));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;
        let err = LoggerError::Configuration {
            path: PathBuf::from("/root/logs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }
}
