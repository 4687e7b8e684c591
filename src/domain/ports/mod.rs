//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod event_sink;
pub mod node_accessor;

pub use event_sink::{CheckTreeEvent, CheckTreeEventSink, NoopEventSink, RecordingEventSink};
pub use node_accessor::NodeAccessor;
