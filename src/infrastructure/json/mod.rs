//! JSON tree adapter
//!
//! Trees and value lists arrive as JSON documents: a tree is an array of root
//! node objects, a value list is an array of values.

mod accessor;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{CheckTreeError, CheckTreeResult};

pub use accessor::{flatten_text, JsonAccessor, EXPAND_FIELD, REF_KEY_FIELD};

/// Parse a tree document (array of root nodes)
pub fn parse_tree(content: &str) -> CheckTreeResult<Vec<Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(roots) => Ok(roots),
        other => Err(CheckTreeError::InvalidData {
            message: format!("tree must be a JSON array of nodes, got {}", kind_of(&other)),
        }),
    }
}

/// Parse a value list document (array of values)
pub fn parse_values(content: &str) -> CheckTreeResult<Vec<Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(values) => Ok(values),
        other => Err(CheckTreeError::InvalidData {
            message: format!("value list must be a JSON array, got {}", kind_of(&other)),
        }),
    }
}

/// Load a tree document from disk
pub fn load_tree(path: &Path) -> CheckTreeResult<Vec<Value>> {
    parse_tree(&fs::read_to_string(path)?)
}

/// Load a value list document from disk
pub fn load_values(path: &Path) -> CheckTreeResult<Vec<Value>> {
    parse_values(&fs::read_to_string(path)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
