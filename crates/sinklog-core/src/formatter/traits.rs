//! Formatter trait definition

use std::sync::Arc;

use crate::credentials::Credentials;
use crate::level::Level;

/// Renders a record to text
///
/// Implementations:
/// - `SquareBracketFormatter`: bracketed fields, degraded when credentials are incomplete
///
/// Formatting never fails and must not mutate state: identical inputs give
/// identical output. The returned string carries no line terminator.
pub trait Formatter: Send + Sync {
    /// Render one record
    fn format(
        &self,
        message: &str,
        level: Level,
        logger_name: &str,
        credentials: &Credentials,
    ) -> String;

    /// Entry point used by sinks; forwards to `format`
    fn format_data(
        &self,
        message: &str,
        level: Level,
        logger_name: &str,
        credentials: &Credentials,
    ) -> String {
        self.format(message, level, logger_name, credentials)
    }

    /// User-set format pattern, if this formatter keeps one
    fn format_pattern(&self) -> Option<String> {
        None
    }

    /// Store a format pattern
    ///
    /// Formatters without a pattern slot ignore it, so `format_pattern`
    /// keeps returning `None` for them.
    fn set_format_pattern(&self, _pattern: &str) {}
}

/// Type alias for a formatter shared between sinks
pub type SharedFormatter = Arc<dyn Formatter>;
