//! Structural membership helpers for value lists
//!
//! Values are never compared by identity. Every lookup goes through
//! `PartialEq`, which for `serde_json::Value` is a deep comparison.

/// Whether `values` contains an element structurally equal to `value`
pub fn contains_value<V: PartialEq>(values: &[V], value: &V) -> bool {
    values.iter().any(|v| v == value)
}

/// Drop every value that also appears in `excluded`, keeping order
pub fn without_values<V: PartialEq + Clone>(values: &[V], excluded: &[V]) -> Vec<V> {
    values
        .iter()
        .filter(|v| !contains_value(excluded, v))
        .cloned()
        .collect()
}

/// Order-insensitive comparison of two value lists
pub fn same_values<V: PartialEq>(a: &[V], b: &[V]) -> bool {
    a.len() == b.len()
        && a.iter().all(|v| contains_value(b, v))
        && b.iter().all(|v| contains_value(a, v))
}
