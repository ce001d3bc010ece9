//! File and environment configuration
//!
//! Supports user-level (~/.config/sinklog/config.yaml) and workspace-level
//! (.config/sinklog/config.yaml) files. Files ending in `.json` are read as
//! JSON, everything else as YAML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::level::Level;
use crate::logger::DEFAULT_LOGGER_NAME;
use crate::sink::DEFAULT_LOG_FILE;

/// Overrides `logger_name`
pub const ENV_LOGGER_NAME: &str = "SINKLOG_LOGGER_NAME";
/// Overrides `level`
pub const ENV_LEVEL: &str = "SINKLOG_LEVEL";
/// Overrides `log_file`
pub const ENV_LOG_FILE: &str = "SINKLOG_LOG_FILE";
/// Overrides `sink`
pub const ENV_SINK: &str = "SINKLOG_SINK";

/// Everything needed to build a `Logger`
///
/// ```yaml
/// logger_name: svc
/// level: WARN
/// log_file: /var/log/svc.txt
/// sink: file
/// format_pattern: "%d %m"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Name rendered into every record
    pub logger_name: String,
    /// Severity threshold
    pub level: Level,
    /// Destination of the file sink
    pub log_file: PathBuf,
    /// Registered sink name (`file`, `console`, `memory`, `noop`, ...)
    pub sink: String,
    /// Stored on the formatter; the default layout does not read it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_pattern: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            level: Level::Trace,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            sink: "file".to_string(),
            format_pattern: None,
        }
    }
}

impl LoggerConfig {
    /// Parse YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse JSON text
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Save as YAML (or JSON for `.json` paths), creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply `SINKLOG_*` overrides from the process environment
    pub fn apply_env(self) -> ConfigResult<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`; empty values are ignored
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(name) = get(ENV_LOGGER_NAME) {
            self.logger_name = name;
        }
        if let Some(value) = get(ENV_LEVEL) {
            self.level = value.parse::<Level>().map_err(|_| ConfigError::InvalidLevel {
                source_name: ENV_LEVEL.to_string(),
                value,
            })?;
        }
        if let Some(file) = get(ENV_LOG_FILE) {
            self.log_file = PathBuf::from(file);
        }
        if let Some(sink) = get(ENV_SINK) {
            self.sink = sink;
        }
        Ok(self)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// User-level config file (~/.config/sinklog/config.yaml)
pub fn user_config_path() -> PathBuf {
    // XDG config directory on Linux, ~/Library/Application Support on macOS
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("sinklog").join("config.yaml")
}

/// Workspace-level config file (.config/sinklog/config.yaml under `root`)
pub fn workspace_config_path(root: impl AsRef<Path>) -> PathBuf {
    root.as_ref().join(".config").join("sinklog").join("config.yaml")
}
