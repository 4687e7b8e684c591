//! JSON node accessor
//!
//! Reads label, value and children out of `serde_json::Value` objects using
//! field names configured once (`valueKey`, `labelKey`, `childrenKey`).

use serde_json::Value;

use crate::domain::ports::NodeAccessor;
use crate::domain::value_objects::RefKey;

/// Field written onto each node by the indexer
pub const REF_KEY_FIELD: &str = "refKey";

/// Per-node expand hint field
pub const EXPAND_FIELD: &str = "expand";

/// Accessor for JSON object trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonAccessor {
    value_key: String,
    label_key: String,
    children_key: String,
}

impl Default for JsonAccessor {
    fn default() -> Self {
        Self::new("value", "label", "children")
    }
}

impl JsonAccessor {
    pub fn new(
        value_key: impl Into<String>,
        label_key: impl Into<String>,
        children_key: impl Into<String>,
    ) -> Self {
        Self {
            value_key: value_key.into(),
            label_key: label_key.into(),
            children_key: children_key.into(),
        }
    }

    pub fn value_key(&self) -> &str {
        &self.value_key
    }

    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    pub fn children_key(&self) -> &str {
        &self.children_key
    }

    fn field<'a>(&self, node: &'a Value, key: &str) -> Option<&'a Value> {
        node.as_object().and_then(|obj| obj.get(key))
    }
}

impl NodeAccessor for JsonAccessor {
    type Node = Value;
    type Value = Value;

    fn label_text(&self, node: &Value) -> Option<String> {
        match self.field(node, &self.label_key)? {
            Value::String(s) => Some(s.clone()),
            composite @ (Value::Array(_) | Value::Object(_)) => Some(flatten_text(composite)),
            _ => None,
        }
    }

    fn value(&self, node: &Value) -> Value {
        self.field(node, &self.value_key)
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn children<'a>(&self, node: &'a Value) -> Option<&'a [Value]> {
        self.field(node, &self.children_key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    fn children_mut<'a>(&self, node: &'a mut Value) -> Option<&'a mut [Value]> {
        node.as_object_mut()?
            .get_mut(&self.children_key)?
            .as_array_mut()
            .map(Vec::as_mut_slice)
    }

    fn children_vec_mut<'a>(&self, node: &'a mut Value) -> Option<&'a mut Vec<Value>> {
        let slot = node
            .as_object_mut()?
            .entry(self.children_key.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        if slot.is_null() {
            *slot = Value::Array(Vec::new());
        }
        slot.as_array_mut()
    }

    fn expand_hint(&self, node: &Value) -> Option<bool> {
        self.field(node, EXPAND_FIELD).map(is_truthy)
    }

    fn set_ref_key(&self, node: &mut Value, key: &RefKey) {
        if let Some(obj) = node.as_object_mut() {
            obj.insert(REF_KEY_FIELD.to_string(), Value::String(key.to_string()));
        }
    }
}

/// Textual content of a composite label.
///
/// Arrays concatenate their fragments. Markup-like objects contribute
/// `props.children`, else `children`, else `text`.
pub fn flatten_text(label: &Value) -> String {
    match label {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(parts) => parts.iter().map(flatten_text).collect(),
        Value::Object(obj) => obj
            .get("props")
            .and_then(|props| props.get("children"))
            .or_else(|| obj.get("children"))
            .or_else(|| obj.get("text"))
            .map(flatten_text)
            .unwrap_or_default(),
        Value::Bool(_) | Value::Null => String::new(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
