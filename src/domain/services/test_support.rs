//! Fixtures shared by the service tests

use serde_json::{json, Value};

use super::indexer::{flatten, FlattenOptions};
use crate::domain::entities::TreeIndex;
use crate::domain::value_objects::RefKey;
use crate::infrastructure::json::JsonAccessor;

/// `A[B[C, D]]` with values `a`..`d`
pub fn abcd_tree() -> Vec<Value> {
    vec![json!({"label": "A", "value": "a", "children": [
        {"label": "B", "value": "b", "children": [
            {"label": "C", "value": "c"},
            {"label": "D", "value": "d"}
        ]}
    ]})]
}

/// `R[G[C1, C2], L]` where callers usually mark `g` uncheckable
pub fn grouped_tree() -> Vec<Value> {
    vec![json!({"label": "Root", "value": "r", "children": [
        {"label": "Group", "value": "g", "children": [
            {"label": "C1", "value": "c1"},
            {"label": "C2", "value": "c2"}
        ]},
        {"label": "Leaf", "value": "l"}
    ]})]
}

pub fn values(raw: &[&str]) -> Vec<Value> {
    raw.iter().map(|v| json!(v)).collect()
}

pub fn key(raw: &str) -> RefKey {
    raw.parse().unwrap()
}

/// Flatten `tree` with the given uncheckable values
pub fn build_index(
    mut tree: Vec<Value>,
    uncheckable: &[&str],
    expand_all: bool,
) -> (Vec<Value>, TreeIndex<Value>) {
    let uncheckable = values(uncheckable);
    let index = flatten(
        &JsonAccessor::default(),
        &mut tree,
        &FlattenOptions {
            uncheckable_item_values: &uncheckable,
            expand_all,
        },
    );
    (tree, index)
}

/// Values of the checked nodes, in pre-order
pub fn checked(index: &TreeIndex<Value>) -> Vec<Value> {
    index
        .iter()
        .filter(|n| n.check)
        .map(|n| n.value.clone())
        .collect()
}
