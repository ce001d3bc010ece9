//! In-memory sink

use std::sync::Arc;

use parking_lot::RwLock;

use super::traits::Sink;
use crate::credentials::Credentials;
use crate::error::LoggerResult;
use crate::formatter::{SharedFormatter, SquareBracketFormatter};
use crate::level::Level;

/// In-memory sink for testing and embedding
///
/// Keeps every formatted record, in call order. Records are lost when the
/// sink is dropped.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sinklog_core::{Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::with_sink(sink.clone()).with_name("svc");
/// logger.warn("disk almost full").unwrap();
/// assert_eq!(sink.records(), vec!["[svc] [WARN] [disk almost full]".to_string()]);
/// ```
pub struct MemorySink {
    formatter: SharedFormatter,
    records: RwLock<Vec<String>>,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    /// Create an empty memory sink with a fresh square-bracket formatter
    pub fn new() -> Self {
        Self::with_formatter(Arc::new(SquareBracketFormatter::new()))
    }

    /// Create an empty memory sink sharing an existing formatter
    pub fn with_formatter(formatter: SharedFormatter) -> Self {
        Self {
            formatter,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the recorded lines
    pub fn records(&self) -> Vec<String> {
        self.records.read().clone()
    }

    /// Most recent record
    pub fn last(&self) -> Option<String> {
        self.records.read().last().cloned()
    }

    /// Number of records kept
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all records
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl Sink for MemorySink {
    fn record(
        &self,
        message: &str,
        level: Level,
        logger_name: &str,
        credentials: &Credentials,
    ) -> LoggerResult<()> {
        let line = self.formatter.format_data(message, level, logger_name, credentials);
        self.records.write().push(line);
        Ok(())
    }

    fn formatter(&self) -> Option<SharedFormatter> {
        Some(Arc::clone(&self.formatter))
    }
}

impl std::fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySink")
            .field("records", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.record("one", Level::Error, "svc", &Credentials::default()).unwrap();
        sink.record("two", Level::Debug, "svc", &Credentials::default()).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.records(),
            vec!["[svc] [ERROR] [one]".to_string(), "[svc] [DEBUG] [two]".to_string()]
        );
        assert_eq!(sink.last(), Some("[svc] [DEBUG] [two]".to_string()));

        sink.clear();
        assert!(sink.is_empty());
        assert_eq!(sink.last(), None);
    }

    #[test]
    fn test_shared_formatter() {
        let formatter: SharedFormatter = Arc::new(SquareBracketFormatter::new());
        let a = MemorySink::with_formatter(Arc::clone(&formatter));
        let b = MemorySink::with_formatter(Arc::clone(&formatter));

        let creds = Credentials::new("2024-01-01", "10:00", "lib.rs", "run", 9);
        a.record("x", Level::Warn, "a", &creds).unwrap();
        b.record("x", Level::Warn, "a", &creds).unwrap();

        assert_eq!(a.records(), b.records());
        assert_eq!(a.records()[0], formatter.format_data("x", Level::Warn, "a", &creds));
        assert_eq!(Arc::strong_count(&formatter), 3);
    }
}
