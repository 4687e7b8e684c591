//! checktree - state engine for hierarchical multi-select controls
//!
//! Given an arbitrary tree of labeled, valued nodes, checktree tracks which
//! nodes are checked, expanded, visible under a search keyword and
//! selectable. Check toggles cascade down to descendants and up to
//! ancestors, and the selection is exchanged with callers as a flat list of
//! values.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckTree, CheckTreeOptions};
pub use config::{CheckTreeConfig, ConfigWarning};
pub use domain::entities::{IndexedNode, TreeIndex};
pub use domain::ports::{
    CheckTreeEvent, CheckTreeEventSink, NodeAccessor, NoopEventSink, RecordingEventSink,
};
pub use domain::services::Visibility;
pub use domain::value_objects::{CheckState, RefKey, ValueReportMode};
pub use error::{CheckTreeError, CheckTreeResult};
pub use infrastructure::json::JsonAccessor;
