//! JSON Event Sink
//!
//! Outputs engine events as NDJSON, one object per line.

use std::cell::RefCell;
use std::io::{self, Write};

use serde_json::{json, Value};

use crate::domain::ports::{CheckTreeEvent, CheckTreeEventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    writer: RefCell<Box<dyn Write>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: RefCell::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: RefCell::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: Value) {
        let mut writer = self.writer.borrow_mut();
        let _ = writeln!(writer, "{}", event);
        let _ = writer.flush();
    }
}

/// JSON form of an engine event
pub fn event_to_json(event: &CheckTreeEvent<Value>) -> Value {
    match event {
        CheckTreeEvent::Changed { values } => json!({
            "event": "change",
            "values": values,
        }),
        CheckTreeEvent::Selected {
            ref_key,
            layer,
            checked,
            values,
        } => json!({
            "event": "select",
            "refKey": ref_key,
            "layer": layer,
            "checked": checked,
            "values": values,
        }),
        CheckTreeEvent::Expanded {
            ref_key,
            layer,
            expanded,
            value,
        } => json!({
            "event": "expand",
            "refKey": ref_key,
            "layer": layer,
            "expanded": expanded,
            "value": value,
        }),
        CheckTreeEvent::Searched { keyword } => json!({
            "event": "search",
            "keyword": keyword,
        }),
    }
}

impl CheckTreeEventSink<Value> for JsonEventSink {
    fn on_event(&self, event: CheckTreeEvent<Value>) {
        self.write_event(event_to_json(&event));
    }
}
