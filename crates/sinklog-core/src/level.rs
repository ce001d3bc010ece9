//! Severity levels and the threshold comparison

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Log levels, ordered from most severe to most verbose.
///
/// A lower numeric value means a higher priority. A record passes a
/// logger's threshold when `record_level <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
#[repr(u8)]
pub enum Level {
    Off = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Debug = 4,
    #[default]
    Trace = 5,
}

impl Level {
    /// Every level, most severe first
    pub const ALL: [Level; 6] = [
        Level::Off,
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Debug,
        Level::Trace,
    ];

    /// Upper-case name used in formatted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Numeric rank (0 = OFF ... 5 = TRACE)
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Whether a record at this level is emitted under `threshold`
    pub fn passes(self, threshold: Level) -> bool {
        compare_levels(self, threshold)
    }
}

/// The severity gate: `candidate <= desired`.
pub fn compare_levels(candidate: Level, desired: Level) -> bool {
    candidate <= desired
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name or number is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown log level: {0}")]
pub struct LevelParseError(pub String);

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Level::Off),
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LevelParseError;

    fn try_from(value: String) -> Result<Self, LevelParseError> {
        value.parse()
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelParseError;

    fn try_from(value: u8) -> Result<Self, LevelParseError> {
        Level::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| LevelParseError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering_matches_numbers() {
        for a in Level::ALL {
            for b in Level::ALL {
                assert_eq!(a <= b, a.as_u8() <= b.as_u8(), "{a} vs {b}");
                assert_eq!(a == b, a.as_u8() == b.as_u8());
            }
        }
        assert!(Level::Off < Level::Fatal);
        assert!(Level::Fatal < Level::Error);
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Debug);
        assert!(Level::Debug < Level::Trace);
    }

    #[test]
    fn test_passes_threshold() {
        assert!(Level::Error.passes(Level::Warn));
        assert!(Level::Warn.passes(Level::Warn));
        // DEBUG (4) is numerically above WARN (3), so it is filtered
        assert!(!Level::Debug.passes(Level::Warn));
        assert!(Level::Off.passes(Level::Off));
        assert!(!Level::Fatal.passes(Level::Off));
        for level in Level::ALL {
            assert!(level.passes(Level::Trace));
        }
    }

    #[test]
    fn test_level_to_string() {
        assert_eq!(Level::Off.to_string(), "OFF");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(Level::Trace.to_string(), "TRACE");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" Trace ".parse::<Level>().unwrap(), Level::Trace);
        assert!("info".parse::<Level>().is_err());

        assert_eq!(Level::try_from(0u8).unwrap(), Level::Off);
        assert_eq!(Level::try_from(5u8).unwrap(), Level::Trace);
        assert_eq!(Level::try_from(6u8), Err(LevelParseError("6".to_string())));
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(Level::try_from("debug".to_string()), Ok(Level::Debug));
        assert_eq!(Level::try_from("OFF".to_string()), Ok(Level::Off));
        assert_eq!(
            Level::try_from("chatty".to_string()),
            Err(LevelParseError("chatty".to_string()))
        );
    }

    #[test]
    fn test_level_serde() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"WARN\"");
        let level: Level = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(level, Level::Fatal);
        assert!(serde_json::from_str::<Level>("\"loud\"").is_err());
    }

    #[test]
    fn test_default_is_most_verbose() {
        assert_eq!(Level::default(), Level::Trace);
    }
}
