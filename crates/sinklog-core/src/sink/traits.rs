//! Sink trait definition

use std::sync::Arc;

use crate::credentials::Credentials;
use crate::error::LoggerResult;
use crate::formatter::SharedFormatter;
use crate::level::Level;

/// Destination for formatted records
///
/// Implementations:
/// - `FileSink`: appends one line per record to a file
/// - `ConsoleSink`: writes to stdout/stderr
/// - `MemorySink`: keeps records in memory
/// - `NoOpSink`: discards everything
///
/// A sink usually owns a shared formatter and asks it for the text of the
/// record before emitting it. Failures are returned to the caller; sinks
/// never retry or buffer for later.
pub trait Sink: Send + Sync {
    /// Format and emit one record
    fn record(
        &self,
        message: &str,
        level: Level,
        logger_name: &str,
        credentials: &Credentials,
    ) -> LoggerResult<()>;

    /// The formatter this sink renders records with, if any
    fn formatter(&self) -> Option<SharedFormatter> {
        None
    }
}

/// Type alias for a boxed sink
pub type BoxedSink = Box<dyn Sink>;

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;
