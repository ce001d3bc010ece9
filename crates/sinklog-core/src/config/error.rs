//! Configuration error types

/// Errors that can occur while loading or applying configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log level in {source_name}: {value}")]
    InvalidLevel { source_name: String, value: String },

    #[error("Unknown sink: {0}")]
    UnknownSink(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
