//! Loggers
//!
//! - `Logger`: an explicit, caller-owned logger
//! - `global`: one process-wide logger behind a mutex, driven by macros

mod settings;
#[allow(clippy::module_inception)]
mod logger;
pub mod global;

pub use settings::{LogSettings, DEFAULT_LOGGER_NAME};
pub use logger::Logger;
