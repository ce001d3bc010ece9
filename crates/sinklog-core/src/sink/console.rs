//! Console sink implementation

use std::io::{self, Write};
use std::sync::Arc;

use super::traits::Sink;
use crate::credentials::Credentials;
use crate::error::{LoggerError, LoggerResult};
use crate::formatter::{SharedFormatter, SquareBracketFormatter};
use crate::level::Level;

/// A sink that outputs to the console
///
/// `FATAL` and `ERROR` records go to stderr, everything else to stdout.
#[derive(Clone)]
pub struct ConsoleSink {
    formatter: SharedFormatter,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Create a console sink with a fresh square-bracket formatter
    pub fn new() -> Self {
        Self::with_formatter(Arc::new(SquareBracketFormatter::new()))
    }

    /// Create a console sink sharing an existing formatter
    pub fn with_formatter(formatter: SharedFormatter) -> Self {
        Self { formatter }
    }

    fn uses_stderr(level: Level) -> bool {
        matches!(level, Level::Fatal | Level::Error)
    }
}

impl Sink for ConsoleSink {
    fn record(
        &self,
        message: &str,
        level: Level,
        logger_name: &str,
        credentials: &Credentials,
    ) -> LoggerResult<()> {
        let line = self.formatter.format_data(message, level, logger_name, credentials);
        if Self::uses_stderr(level) {
            writeln!(io::stderr().lock(), "{}", line)
                .map_err(|e| LoggerError::sink_unavailable("<stderr>", e))
        } else {
            writeln!(io::stdout().lock(), "{}", line)
                .map_err(|e| LoggerError::sink_unavailable("<stdout>", e))
        }
    }

    fn formatter(&self) -> Option<SharedFormatter> {
        Some(Arc::clone(&self.formatter))
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_selection() {
        assert!(ConsoleSink::uses_stderr(Level::Fatal));
        assert!(ConsoleSink::uses_stderr(Level::Error));
        assert!(!ConsoleSink::uses_stderr(Level::Warn));
        assert!(!ConsoleSink::uses_stderr(Level::Off));
        assert!(!ConsoleSink::uses_stderr(Level::Trace));
    }

    #[test]
    fn test_console_sink_records() {
        // This test just verifies the sink accepts records on both streams
        let sink = ConsoleSink::new();
        for level in Level::ALL {
            sink.record("console message", level, "test", &Credentials::default())
                .unwrap();
        }
        assert!(sink.formatter().is_some());
    }
}
