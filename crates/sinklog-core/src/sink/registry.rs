//! Sink registry for creating sinks by name

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::console::ConsoleSink;
use super::file::{FileSink, DEFAULT_LOG_FILE};
use super::memory::MemorySink;
use super::noop::NoOpSink;
use super::traits::SharedSink;
use crate::formatter::{SharedFormatter, SquareBracketFormatter};

/// Inputs handed to a sink factory
#[derive(Clone)]
pub struct SinkContext {
    /// Formatter the new sink should render with
    pub formatter: SharedFormatter,
    /// Destination for file-backed sinks
    pub log_file: PathBuf,
}

impl Default for SinkContext {
    fn default() -> Self {
        Self {
            formatter: Arc::new(SquareBracketFormatter::new()),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl std::fmt::Debug for SinkContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkContext")
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}

/// Factory function type for creating sinks
///
/// Called under the registry lock; must not call back into the registry.
pub type SinkFactory = Box<dyn Fn(&SinkContext) -> SharedSink + Send + Sync>;

/// Definition of a registered sink
pub struct SinkDefinition {
    /// Unique name for this sink
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: SinkFactory,
}

impl std::fmt::Debug for SinkDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn builtin(name: &str, description: &str, factory: SinkFactory) -> (String, SinkDefinition) {
    (
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    )
}

/// Global registry of sinks
static REGISTRY: Lazy<RwLock<HashMap<String, SinkDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        builtin(
            "file",
            "Append one line per record to a text file",
            Box::new(|ctx| {
                Arc::new(FileSink::with_formatter(Arc::clone(&ctx.formatter), ctx.log_file.clone()))
            }),
        ),
        builtin(
            "console",
            "Write records to stdout, errors to stderr",
            Box::new(|ctx| Arc::new(ConsoleSink::with_formatter(Arc::clone(&ctx.formatter)))),
        ),
        builtin(
            "memory",
            "Keep records in memory for testing",
            Box::new(|ctx| Arc::new(MemorySink::with_formatter(Arc::clone(&ctx.formatter)))),
        ),
        builtin(
            "noop",
            "Discard every record",
            Box::new(|_| Arc::new(NoOpSink::new())),
        ),
    ]);

    RwLock::new(map)
});

/// Register a new sink type, replacing any sink with the same name
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use sinklog_core::sink::{register_sink, create_sink, NoOpSink, SinkContext};
///
/// register_sink("quiet", "Drops everything", Box::new(|_| Arc::new(NoOpSink::new())));
/// assert!(create_sink("quiet", &SinkContext::default()).is_some());
/// ```
pub fn register_sink(name: &str, description: &str, factory: SinkFactory) {
    let mut registry = REGISTRY.write();
    registry.insert(
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a sink by name
///
/// Returns `None` if the name is not registered. The registry lock is held
/// while the factory runs, so a factory must not register or unregister
/// sinks itself.
pub fn create_sink(name: &str, ctx: &SinkContext) -> Option<SharedSink> {
    let registry = REGISTRY.read();
    registry.get(name).map(|def| (def.factory)(ctx))
}

/// List all registered sinks as (name, description) pairs
pub fn list_sinks() -> Vec<(String, String)> {
    let registry = REGISTRY.read();
    registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect()
}

/// Check if a sink is registered
pub fn has_sink(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a sink (mainly for testing)
pub fn unregister_sink(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use crate::level::Level;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_sinks_registered() {
        for name in ["file", "console", "memory", "noop"] {
            assert!(has_sink(name), "{name} should be registered");
        }
    }

    #[test]
    fn test_create_file_sink_uses_context_path() {
        let dir = tempdir().unwrap();
        let ctx = SinkContext {
            log_file: dir.path().join("out.log"),
            ..SinkContext::default()
        };
        let sink = create_sink("file", &ctx).unwrap();
        sink.record("hi", Level::Warn, "svc", &Credentials::default()).unwrap();

        let content = fs::read_to_string(dir.path().join("out.log")).unwrap();
        assert_eq!(content, "[svc] [WARN] [hi]\n");
    }

    #[test]
    fn test_created_sink_shares_formatter() {
        let ctx = SinkContext::default();
        let sink = create_sink("memory", &ctx).unwrap();
        let formatter = sink.formatter().unwrap();
        assert!(Arc::ptr_eq(&formatter, &ctx.formatter));
    }

    #[test]
    fn test_create_unknown_sink() {
        assert!(create_sink("nonexistent_xyz", &SinkContext::default()).is_none());
    }

    #[test]
    fn test_list_sinks() {
        let sinks = list_sinks();
        let names: Vec<_> = sinks.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"file"));
        assert!(names.contains(&"noop"));
    }

    #[test]
    fn test_register_custom_sink() {
        register_sink(
            "test_custom_sink",
            "A test sink",
            Box::new(|_| Arc::new(NoOpSink::new())),
        );
        assert!(has_sink("test_custom_sink"));
        assert!(create_sink("test_custom_sink", &SinkContext::default()).is_some());

        // Clean up
        assert!(unregister_sink("test_custom_sink"));
        assert!(!has_sink("test_custom_sink"));
    }
}
