//! Process-wide default logger
//!
//! One `Logger` lives behind one mutex for the whole process. It starts as
//! `Logger::new()` (file sink on `logs.txt`, threshold TRACE) the first time
//! it is touched and is dropped at process exit. The mutex is held for the
//! full gate/format/write sequence, so records from different threads are
//! written whole and in lock order. The lock is not reentrant: code that
//! runs under it (sinks, `with_default_logger` closures) must not call back
//! into this module.
//!
//! The macros capture call-site credentials and route through [`log`]:
//!
//! ```no_run
//! use sinklog_core::{warn_log, Level};
//! use sinklog_core::logger::global;
//!
//! global::set_logger_name("svc");
//! global::set_severity_level(Level::Warn);
//! warn_log!("disk at {}%", 91).unwrap();
//! ```

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::logger::Logger;
use crate::credentials::Credentials;
use crate::error::{LoggerError, LoggerResult};
use crate::level::Level;
use crate::sink::SharedSink;

static DEFAULT_LOGGER: Lazy<Mutex<Logger>> = Lazy::new(|| Mutex::new(Logger::new()));

/// Replace the sink of the default logger
pub fn set_sink(sink: SharedSink) {
    DEFAULT_LOGGER.lock().set_sink(sink);
}

/// Change the severity threshold of the default logger
pub fn set_severity_level(level: Level) {
    DEFAULT_LOGGER.lock().set_log_level(level);
}

/// Change the name of the default logger
pub fn set_logger_name(name: impl Into<String>) {
    DEFAULT_LOGGER.lock().set_logger_name(name);
}

/// Run `f` with exclusive access to the default logger
///
/// The lock is held while `f` runs; `f` must not call back into this
/// module or it deadlocks.
pub fn with_default_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    f(&mut DEFAULT_LOGGER.lock())
}

/// Log through the default logger with captured credentials
///
/// Stricter than `Logger::log_with`: the message and every credential field
/// must be present and the line must be non-zero. The checks run before the
/// threshold gate.
///
/// The default logger's lock is held while the sink records, so a custom
/// sink must not log through this module from inside `record`.
pub fn log(level: Level, message: &str, credentials: Credentials) -> LoggerResult<()> {
    if message.is_empty() {
        return Err(LoggerError::empty_input("message"));
    }
    if credentials.is_empty() {
        return Err(LoggerError::CredentialsEmpty);
    }
    credentials.ensure_complete()?;

    DEFAULT_LOGGER.lock().log_with(level, message, credentials)
}

/// Log a formatted message at `level` through the default logger
#[macro_export]
macro_rules! log_at {
    ($level:expr, $($arg:tt)*) => {
        $crate::logger::global::log($level, &format!($($arg)*), $crate::credentials!())
    };
}

#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! fatal_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Fatal, $($arg)*)
    };
}

#[macro_export]
macro_rules! off_log {
    ($($arg:tt)*) => {
        $crate::log_at!($crate::Level::Off, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::sync::Arc;

    // The default logger is process-wide, so everything touching it lives
    // in this one test.
    #[test]
    fn test_default_logger() {
        let sink = Arc::new(MemorySink::new());
        set_sink(sink.clone());
        set_logger_name("glob");
        set_severity_level(Level::Warn);

        crate::error_log!("value {}", 7).unwrap();
        crate::debug_log!("filtered").unwrap();
        crate::trace_log!("filtered").unwrap();
        crate::warn_log!("warned").unwrap();
        crate::fatal_log!("fatal").unwrap();
        crate::off_log!("off").unwrap();
        crate::log_at!(Level::Error, "explicit").unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 5);
        assert!(records[0].ends_with("[glob] [ERROR] [value 7]"));
        assert!(records[0].contains("[sinklog_core::logger::global::tests]"));
        assert!(records[0].contains("global.rs]"));
        assert!(records[1].ends_with("[glob] [WARN] [warned]"));
        assert!(records[2].ends_with("[glob] [FATAL] [fatal]"));
        assert!(records[3].ends_with("[glob] [OFF] [off]"));
        assert!(records[4].ends_with("[glob] [ERROR] [explicit]"));

        // Strict checks fail even for filtered levels
        let full = Credentials::new("2024-01-01", "10:00", "main.rs", "main", 1);
        assert!(matches!(
            log(Level::Trace, "", full.clone()),
            Err(LoggerError::EmptyInput { field: "message" })
        ));
        assert!(matches!(
            log(Level::Trace, "x", Credentials::default()),
            Err(LoggerError::CredentialsEmpty)
        ));
        assert!(matches!(
            log(Level::Trace, "x", Credentials::new("2024-01-01", "10:00", "main.rs", "main", 0)),
            Err(LoggerError::InvalidLineNumber)
        ));
        assert!(matches!(
            log(Level::Trace, "x", Credentials::minimal("2024-01-01", "10:00")),
            Err(LoggerError::EmptyInput { field: "file" })
        ));
        assert_eq!(sink.len(), 5);

        log(Level::Error, "direct", full).unwrap();
        assert_eq!(
            sink.last().unwrap(),
            "[2024-01-01] [10:00] [main.rs] [1] [main] [glob] [ERROR] [direct]"
        );

        with_default_logger(|logger| {
            assert_eq!(logger.logger_name(), "glob");
            assert_eq!(logger.log_level(), Level::Warn);
            logger.set_log_level(Level::Trace);
        });
        crate::trace_log!("now visible").unwrap();
        assert!(sink.last().unwrap().ends_with("[glob] [TRACE] [now visible]"));
    }
}
