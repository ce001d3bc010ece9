//! Sink abstractions and implementations
//!
//! This module provides the last stage of the pipeline with:
//! - `Sink` trait for implementing custom destinations
//! - Built-in implementations: `FileSink` (default), `ConsoleSink`, `MemorySink`, `NoOpSink`
//! - A registry for discovering and creating sinks by name

mod traits;
mod file;
mod console;
mod memory;
mod noop;
mod registry;

pub use traits::{Sink, SharedSink, BoxedSink};
pub use file::{FileSink, DefaultSink, DEFAULT_LOG_FILE};
pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use noop::NoOpSink;
pub use registry::{
    register_sink, create_sink, list_sinks, has_sink, unregister_sink,
    SinkContext, SinkDefinition, SinkFactory,
};
