//! Error types for logging operations.

use std::fmt;
use std::io;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur while setting up the logger.
#[derive(Debug)]
pub enum LoggingError {
    /// The log file could not be created or written.
    Io(io::Error),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "log file error: {}", err),
        }
    }
}

impl std::error::Error for LoggingError {}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_display_io() {
        let io_err = Error::new(ErrorKind::NotFound, "no such file");
        let err = LoggingError::Io(io_err);
        assert!(err.to_string().starts_with("log file error:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = Error::new(ErrorKind::PermissionDenied, "denied");
        let err: LoggingError = io_err.into();
        let LoggingError::Io(inner) = err;
        assert_eq!(inner.kind(), ErrorKind::PermissionDenied);
    }
}
