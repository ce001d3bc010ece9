//! Logger configuration
//!
//! Settings can come from:
//! - A YAML or JSON file (user-level `~/.config/sinklog/config.yaml` or a workspace file)
//! - `SINKLOG_*` environment variables, applied on top

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{
    LoggerConfig, user_config_path, workspace_config_path,
    ENV_LOGGER_NAME, ENV_LEVEL, ENV_LOG_FILE, ENV_SINK,
};
