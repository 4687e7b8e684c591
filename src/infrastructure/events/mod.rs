//! Event Sink Implementations
//!
//! Provides concrete implementations of CheckTreeEventSink:
//! - JsonEventSink: NDJSON output for scripting
//! - TracingEventSink: forwards events to `tracing`

mod json;
mod tracing_sink;

pub use json::JsonEventSink;
pub use tracing_sink::TracingEventSink;
