//! Square-bracket formatter

use parking_lot::RwLock;

use super::traits::Formatter;
use crate::credentials::Credentials;
use crate::level::Level;

/// Formats every field in its own brackets, separated by single spaces.
///
/// With valid credentials:
/// `[date] [time] [file] [line] [function] [logger] [LEVEL] [message]`
///
/// Otherwise the degraded form `[logger] [LEVEL] [message]`.
///
/// The format pattern is stored for callers that want it but the layout
/// above is fixed and does not read it.
#[derive(Debug, Default)]
pub struct SquareBracketFormatter {
    format_pattern: RwLock<Option<String>>,
}

/// The formatter used when none is supplied
pub type DefaultFormatter = SquareBracketFormatter;

impl SquareBracketFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with a format pattern already set
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            format_pattern: RwLock::new(Some(pattern.into())),
        }
    }
}

impl Formatter for SquareBracketFormatter {
    fn format(
        &self,
        message: &str,
        level: Level,
        logger_name: &str,
        credentials: &Credentials,
    ) -> String {
        if credentials.is_valid() {
            format!(
                "[{}] [{}] [{}] [{}] [{}] [{}] [{}] [{}]",
                credentials.date(),
                credentials.time(),
                credentials.file_name(),
                credentials.line_number(),
                credentials.function_name(),
                logger_name,
                level.as_str(),
                message,
            )
        } else {
            format!("[{}] [{}] [{}]", logger_name, level.as_str(), message)
        }
    }

    fn format_pattern(&self) -> Option<String> {
        self.format_pattern.read().clone()
    }

    fn set_format_pattern(&self, pattern: &str) {
        *self.format_pattern.write() = Some(pattern.to_string());
    }
}
