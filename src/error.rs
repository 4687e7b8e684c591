//! Error types for checktree
//!
//! The propagation, serialization and filtering algorithms are total over
//! well-formed trees and never fail. Errors only surface at the engine facade
//! (stale or forbidden node references) and at the I/O edges (config, JSON).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for checktree operations
pub type CheckTreeResult<T> = Result<T, CheckTreeError>;

/// Main error type for checktree operations
#[derive(Error, Debug)]
pub enum CheckTreeError {
    /// The ref key does not address a node of the current index.
    ///
    /// Happens when a caller keeps a reference across a tree swap without
    /// waiting for the index rebuild.
    #[error("no node with ref key '{ref_key}' in the current tree")]
    UnknownNode { ref_key: String },

    /// The node is listed in `disabled_item_values` and is not interactive
    #[error("node '{ref_key}' is disabled")]
    NodeDisabled { ref_key: String },

    /// A string could not be parsed as a ref key (`0-2-1`)
    #[error("invalid ref key '{input}'")]
    InvalidRefKey { input: String },

    /// Config file could not be deserialized
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Tree or value list is not shaped as expected
    #[error("invalid tree data: {message}")]
    InvalidData { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
