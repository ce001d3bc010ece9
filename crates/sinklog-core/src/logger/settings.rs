//! Per-logger settings

use crate::level::Level;

/// Name given to loggers that were not named explicitly
pub const DEFAULT_LOGGER_NAME: &str = "default_logger";

/// Threshold and name of one logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Most verbose level that is still emitted
    pub desired_level: Level,
    /// Name rendered into every record
    pub logger_name: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            desired_level: Level::Trace,
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
        }
    }
}

impl LogSettings {
    pub fn new(logger_name: impl Into<String>, desired_level: Level) -> Self {
        Self {
            desired_level,
            logger_name: logger_name.into(),
        }
    }

    /// Whether a record at `level` passes the threshold
    pub fn should_log(&self, level: Level) -> bool {
        level.passes(self.desired_level)
    }
}
