//! CheckTree Event Port
//!
//! Notifications the engine sends to its collaborators (rendering layer,
//! application code) after user interactions.

use std::cell::RefCell;

use crate::domain::value_objects::RefKey;

/// Event emitted by the engine facade
#[derive(Debug, Clone, PartialEq)]
pub enum CheckTreeEvent<V> {
    /// The selected-value list changed
    Changed { values: Vec<V> },

    /// A node was checked or unchecked by the user
    Selected {
        ref_key: RefKey,
        layer: usize,
        checked: bool,
        values: Vec<V>,
    },

    /// A node was expanded or collapsed.
    ///
    /// Lazily loaded subtrees are spliced in with
    /// `CheckTree::concat_children(&ref_key, children)`.
    Expanded {
        ref_key: RefKey,
        layer: usize,
        expanded: bool,
        value: V,
    },

    /// The search keyword changed
    Searched { keyword: String },
}

/// Trait for receiving engine events
///
/// Implementations can be:
/// - NoopEventSink: silent operation
/// - RecordingEventSink: keeps every event (tests, CLI JSON output)
/// - application callbacks wrapping UI state
pub trait CheckTreeEventSink<V> {
    /// Handle an engine event
    fn on_event(&self, event: CheckTreeEvent<V>);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl<V> CheckTreeEventSink<V> for NoopEventSink {
    fn on_event(&self, _event: CheckTreeEvent<V>) {
        // Do nothing
    }
}

/// Sink that records every event in order
#[derive(Debug, Default)]
pub struct RecordingEventSink<V> {
    events: RefCell<Vec<CheckTreeEvent<V>>>,
}

impl<V: Clone> RecordingEventSink<V> {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<CheckTreeEvent<V>> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<CheckTreeEvent<V>> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl<V> CheckTreeEventSink<V> for RecordingEventSink<V> {
    fn on_event(&self, event: CheckTreeEvent<V>) {
        self.events.borrow_mut().push(event);
    }
}

impl<V, S: CheckTreeEventSink<V> + ?Sized> CheckTreeEventSink<V> for std::rc::Rc<S> {
    fn on_event(&self, event: CheckTreeEvent<V>) {
        (**self).on_event(event);
    }
}
