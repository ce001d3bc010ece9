//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by `Logger::log` and `Sink::record`
#[derive(Error, Debug)]
pub enum LoggerError {
    /// A required text input was empty
    #[error("{field} found to be empty")]
    EmptyInput { field: &'static str },

    /// No call-site data was captured at all
    #[error("Log credentials found to be empty")]
    CredentialsEmpty,

    /// A strict credentials check saw line number zero
    #[error("Extracted line number found to be zero")]
    InvalidLineNumber,

    /// The sink's destination could not be opened or written
    #[error("Sink unavailable ({path}): {source}")]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create an empty input error for the named field
    pub fn empty_input(field: &'static str) -> Self {
        Self::EmptyInput { field }
    }

    /// Create a sink unavailable error
    pub fn sink_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Stable numeric code for this error kind
    pub fn code(&self) -> u32 {
        match self {
            LoggerError::EmptyInput { .. } => 101,
            LoggerError::CredentialsEmpty => 102,
            LoggerError::InvalidLineNumber => 103,
            LoggerError::SinkUnavailable { .. } => 104,
        }
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(LoggerError::empty_input("message").code(), 101);
        assert_eq!(LoggerError::CredentialsEmpty.code(), 102);
        assert_eq!(LoggerError::InvalidLineNumber.code(), 103);
        let err = LoggerError::sink_unavailable("logs.txt", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.code(), 104);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LoggerError::empty_input("message").to_string(),
            "message found to be empty"
        );
        assert_eq!(
            LoggerError::InvalidLineNumber.to_string(),
            "Extracted line number found to be zero"
        );

        let err = LoggerError::sink_unavailable(
            "/nope/logs.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Sink unavailable (/nope/logs.txt): denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
