//! File sink
//!
//! Appends each record as one line to a plain text file. The file is opened
//! for every record and closed before `record` returns, so changing the
//! path only affects later records.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::traits::Sink;
use crate::credentials::Credentials;
use crate::error::{LoggerError, LoggerResult};
use crate::formatter::{SharedFormatter, SquareBracketFormatter};
use crate::level::Level;

/// Default destination, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "logs.txt";

/// Sink that appends formatted records to a file
///
/// # Thread Safety
///
/// One mutex guards the path and the open/append/close sequence, so
/// concurrent `record` and `set_log_file_name` calls are serialized and
/// lines from different threads never interleave.
///
/// # Example
///
/// ```no_run
/// use sinklog_core::{Credentials, Level, Sink, FileSink};
///
/// let sink = FileSink::with_path("app.log");
/// sink.record("started", Level::Warn, "svc", &Credentials::default()).unwrap();
/// ```
pub struct FileSink {
    formatter: SharedFormatter,
    path: Mutex<PathBuf>,
}

/// The sink used when none is supplied
pub type DefaultSink = FileSink;

impl Default for FileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSink {
    /// File sink writing to `logs.txt` with a fresh square-bracket formatter
    pub fn new() -> Self {
        Self::with_path(DEFAULT_LOG_FILE)
    }

    /// File sink writing to `path` with a fresh square-bracket formatter
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::with_formatter(Arc::new(SquareBracketFormatter::new()), path)
    }

    /// File sink sharing an existing formatter
    pub fn with_formatter(formatter: SharedFormatter, path: impl Into<PathBuf>) -> Self {
        Self {
            formatter,
            path: Mutex::new(path.into()),
        }
    }

    /// Change the destination for subsequent records
    pub fn set_log_file_name(&self, path: impl Into<PathBuf>) {
        *self.path.lock() = path.into();
    }

    /// Current destination
    pub fn log_file_name(&self) -> PathBuf {
        self.path.lock().clone()
    }

    fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        // One write per record keeps the line intact under O_APPEND
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes())
    }
}

impl Sink for FileSink {
    fn record(
        &self,
        message: &str,
        level: Level,
        logger_name: &str,
        credentials: &Credentials,
    ) -> LoggerResult<()> {
        let line = self.formatter.format_data(message, level, logger_name, credentials);
        let path = self.path.lock();
        Self::append_line(&path, &line)
            .map_err(|e| LoggerError::sink_unavailable(path.as_path(), e))
    }

    fn formatter(&self) -> Option<SharedFormatter> {
        Some(Arc::clone(&self.formatter))
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("path", &*self.path.lock())
            .finish()
    }
}
