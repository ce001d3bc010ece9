//! Caller-owned logger

use std::sync::Arc;

use super::settings::LogSettings;
use crate::config::{ConfigError, ConfigResult, LoggerConfig};
use crate::credentials::Credentials;
use crate::error::{LoggerError, LoggerResult};
use crate::formatter::SquareBracketFormatter;
use crate::level::Level;
use crate::sink::{create_sink, FileSink, SharedSink, SinkContext};

/// Filters records by severity and hands the survivors to a sink.
///
/// Every call runs the whole pipeline on the caller's thread: empty-message
/// check, threshold gate, then `Sink::record`. Nothing is queued.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sinklog_core::{Level, Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let mut logger = Logger::with_sink(sink.clone()).with_level(Level::Warn);
///
/// logger.debug("filtered").unwrap();
/// logger.error("kept").unwrap();
/// logger.set_logger_name("svc");
/// logger.fatal("renamed").unwrap();
///
/// assert_eq!(sink.records(), vec![
///     "[default_logger] [ERROR] [kept]".to_string(),
///     "[svc] [FATAL] [renamed]".to_string(),
/// ]);
/// ```
pub struct Logger {
    settings: LogSettings,
    sink: SharedSink,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger writing to `logs.txt` through a fresh square-bracket formatter
    pub fn new() -> Self {
        Self::with_sink(Arc::new(FileSink::new()))
    }

    /// Logger writing to the given sink with default settings
    pub fn with_sink(sink: SharedSink) -> Self {
        Self {
            settings: LogSettings::default(),
            sink,
        }
    }

    /// Set the logger name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.settings.logger_name = name.into();
        self
    }

    /// Set the severity threshold
    pub fn with_level(mut self, level: Level) -> Self {
        self.settings.desired_level = level;
        self
    }

    /// Build a logger from configuration
    ///
    /// The sink is created through the sink registry with a fresh formatter
    /// carrying the configured format pattern.
    pub fn from_config(config: &LoggerConfig) -> ConfigResult<Self> {
        let formatter = match &config.format_pattern {
            Some(pattern) => SquareBracketFormatter::with_pattern(pattern.clone()),
            None => SquareBracketFormatter::new(),
        };
        let ctx = SinkContext {
            formatter: Arc::new(formatter),
            log_file: config.log_file.clone(),
        };
        let sink = create_sink(&config.sink, &ctx)
            .ok_or_else(|| ConfigError::UnknownSink(config.sink.clone()))?;

        Ok(Self::with_sink(sink)
            .with_name(config.logger_name.clone())
            .with_level(config.level))
    }

    /// Log a message without call-site credentials
    pub fn log(&self, level: Level, message: &str) -> LoggerResult<()> {
        self.log_with(level, message, Credentials::default())
    }

    /// Log a message with call-site credentials
    ///
    /// An empty message always fails, even if the level would be filtered.
    pub fn log_with(
        &self,
        level: Level,
        message: &str,
        credentials: Credentials,
    ) -> LoggerResult<()> {
        if message.is_empty() {
            return Err(LoggerError::empty_input("message"));
        }
        if !self.settings.should_log(level) {
            return Ok(());
        }
        self.sink
            .record(message, level, &self.settings.logger_name, &credentials)
    }

    pub fn trace(&self, message: &str) -> LoggerResult<()> {
        self.log(Level::Trace, message)
    }

    pub fn debug(&self, message: &str) -> LoggerResult<()> {
        self.log(Level::Debug, message)
    }

    pub fn warn(&self, message: &str) -> LoggerResult<()> {
        self.log(Level::Warn, message)
    }

    pub fn error(&self, message: &str) -> LoggerResult<()> {
        self.log(Level::Error, message)
    }

    pub fn fatal(&self, message: &str) -> LoggerResult<()> {
        self.log(Level::Fatal, message)
    }

    pub fn off(&self, message: &str) -> LoggerResult<()> {
        self.log(Level::Off, message)
    }

    /// Change the severity threshold for subsequent calls
    pub fn set_log_level(&mut self, level: Level) {
        self.settings.desired_level = level;
    }

    /// Change the logger name for subsequent calls
    pub fn set_logger_name(&mut self, name: impl Into<String>) {
        self.settings.logger_name = name.into();
    }

    /// Replace the sink for subsequent calls
    pub fn set_sink(&mut self, sink: SharedSink) {
        self.sink = sink;
    }

    pub fn log_level(&self) -> Level {
        self.settings.desired_level
    }

    pub fn logger_name(&self) -> &str {
        &self.settings.logger_name
    }

    pub fn settings(&self) -> &LogSettings {
        &self.settings
    }

    pub fn sink(&self) -> SharedSink {
        Arc::clone(&self.sink)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
