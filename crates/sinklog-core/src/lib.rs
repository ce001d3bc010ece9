//! Sinklog Core
//!
//! A small leveled logger built as a three-stage pipeline:
//! severity filtering, formatting, sinking.
//!
//! ## Pipeline
//!
//! - `Logger` gates each record on its threshold (`level <= threshold`)
//! - the `Sink` asks its `Formatter` for the record text
//! - the `Sink` emits the text (file, console, memory, ...)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sinklog_core::{credentials, FileSink, Level, Logger};
//!
//! let logger = Logger::with_sink(Arc::new(FileSink::with_path("app.log")))
//!     .with_name("svc")
//!     .with_level(Level::Warn);
//!
//! logger.debug("dropped")?;
//! logger.log_with(Level::Error, "written with call site", credentials!())?;
//! # Ok::<(), sinklog_core::LoggerError>(())
//! ```
//!
//! A process-wide logger and capture macros live in [`logger::global`].

pub mod level;
pub mod credentials;
pub mod error;
pub mod formatter;
pub mod sink;
pub mod logger;
pub mod config;

// Re-export commonly used types
pub use level::{Level, LevelParseError, compare_levels};
pub use credentials::Credentials;
pub use error::{LoggerError, LoggerResult};

pub use formatter::{Formatter, SharedFormatter, SquareBracketFormatter, DefaultFormatter};

pub use sink::{
    Sink, SharedSink, BoxedSink,
    FileSink, DefaultSink, ConsoleSink, MemorySink, NoOpSink,
    register_sink, create_sink, list_sinks, SinkContext,
};

pub use logger::{Logger, LogSettings, DEFAULT_LOGGER_NAME};

pub use config::{LoggerConfig, ConfigError, ConfigResult};

#[doc(hidden)]
pub mod __private {
    pub use chrono;
}
