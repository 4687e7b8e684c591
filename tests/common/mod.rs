//! Common test utilities for checktree scenario and CLI tests.
//!
//! This module provides:
//! - Fixture trees used across scenarios
//! - Small constructors for ref keys, value lists and engines

#![allow(dead_code)]

use serde_json::{json, Value};

use checktree::{CheckTree, CheckTreeOptions, JsonAccessor, RefKey};

/// `A[B[C, D]]`
pub fn abcd() -> Vec<Value> {
    vec![json!({"label": "A", "value": "a", "children": [
        {"label": "B", "value": "b", "children": [
            {"label": "C", "value": "c"},
            {"label": "D", "value": "d"}
        ]}
    ]})]
}

/// `apple[bob, car]`
pub fn fruit() -> Vec<Value> {
    vec![json!({"label": "apple", "value": "a", "children": [
        {"label": "bob", "value": "b"},
        {"label": "car", "value": "c"}
    ]})]
}

/// Two roots; the first is a group header that cannot be checked itself
pub fn pantry() -> Vec<Value> {
    vec![
        json!({"label": "Fruits", "value": "fruits", "children": [
            {"label": "Apple", "value": "apple"},
            {"label": "Pear", "value": "pear"}
        ]}),
        json!({"label": "Bread", "value": "bread"}),
    ]
}

pub fn key(raw: &str) -> RefKey {
    raw.parse().expect("valid ref key")
}

pub fn values(raw: &[&str]) -> Vec<Value> {
    raw.iter().map(|v| json!(v)).collect()
}

pub fn engine(data: Vec<Value>, options: CheckTreeOptions<Value>) -> CheckTree<JsonAccessor> {
    CheckTree::new(data, JsonAccessor::default(), options)
}
