//! Tracing Event Sink

use std::fmt::Debug;

use crate::domain::ports::{CheckTreeEvent, CheckTreeEventSink};

/// Event sink that logs every event at `info` level
pub struct TracingEventSink;

impl<V: Debug> CheckTreeEventSink<V> for TracingEventSink {
    fn on_event(&self, event: CheckTreeEvent<V>) {
        match event {
            CheckTreeEvent::Changed { values } => {
                tracing::info!(count = values.len(), "selection changed");
            }
            CheckTreeEvent::Selected {
                ref_key,
                layer,
                checked,
                values,
            } => {
                tracing::info!(%ref_key, layer, checked, ?values, "node selected");
            }
            CheckTreeEvent::Expanded {
                ref_key,
                layer,
                expanded,
                ..
            } => {
                tracing::info!(%ref_key, layer, expanded, "node expanded");
            }
            CheckTreeEvent::Searched { keyword } => {
                tracing::info!(%keyword, "search keyword changed");
            }
        }
    }
}
