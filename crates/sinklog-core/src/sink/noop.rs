//! No-op sink implementation

use super::traits::Sink;
use crate::credentials::Credentials;
use crate::error::LoggerResult;
use crate::level::Level;

/// A sink that does nothing
///
/// Useful for testing or for silencing a logger without changing its level.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn record(
        &self,
        _message: &str,
        _level: Level,
        _logger_name: &str,
        _credentials: &Credentials,
    ) -> LoggerResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink::new();

        // Every level is accepted and dropped
        for level in Level::ALL {
            assert!(sink.record("message", level, "test", &Credentials::default()).is_ok());
        }
        assert!(sink.formatter().is_none());
    }
}
