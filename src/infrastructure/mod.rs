//! Infrastructure Layer
//!
//! Concrete adapters for the domain ports:
//!
//! - `json` - `NodeAccessor` for `serde_json::Value` trees plus document loading
//! - `events` - event sinks that print engine events

pub mod events;
pub mod json;

pub use events::TracingEventSink;
pub use json::{load_tree, load_values, parse_tree, parse_values, JsonAccessor};
