//! Call-site credentials attached to a log record

use crate::error::{LoggerError, LoggerResult};

/// Provenance of a log call: date, time, source file, function and line.
///
/// Immutable once built. The default value is the empty bundle used when
/// the caller captured nothing; a line number of zero means "not captured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Credentials {
    date: String,
    time: String,
    file_name: String,
    function_name: String,
    line_number: u32,
}

impl Credentials {
    /// Create a fully populated bundle
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        file_name: impl Into<String>,
        function_name: impl Into<String>,
        line_number: u32,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            file_name: file_name.into(),
            function_name: function_name.into(),
            line_number,
        }
    }

    /// Create a bundle carrying only date and time
    ///
    /// Never valid, so it always renders in the degraded shape.
    pub fn minimal(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            ..Self::default()
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// True iff all four text fields are non-empty and the line is non-zero
    pub fn is_valid(&self) -> bool {
        !(self.date.is_empty()
            || self.time.is_empty()
            || self.file_name.is_empty()
            || self.function_name.is_empty()
            || self.line_number == 0)
    }

    /// True when nothing at all was captured
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Strict check: report the first missing field instead of a bool
    pub fn ensure_complete(&self) -> LoggerResult<()> {
        let fields = [
            ("date", &self.date),
            ("time", &self.time),
            ("file", &self.file_name),
            ("function", &self.function_name),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, value)| value.is_empty()) {
            return Err(LoggerError::empty_input(field));
        }
        if self.line_number == 0 {
            return Err(LoggerError::InvalidLineNumber);
        }
        Ok(())
    }
}

/// Capture credentials at the macro call site.
///
/// Date and time are the local wall clock when the macro runs; the
/// function name is the enclosing module path.
#[macro_export]
macro_rules! credentials {
    () => {{
        let __now = $crate::__private::chrono::Local::now();
        $crate::Credentials::new(
            __now.format("%Y-%m-%d").to_string(),
            __now.format("%H:%M:%S").to_string(),
            file!(),
            module_path!(),
            line!(),
        )
    }};
}
