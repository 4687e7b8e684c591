//! Check-state serializer
//!
//! Converts between the index's per-node `check` flags and the external flat
//! list of selected values.

use std::collections::HashMap;

use super::propagator::refresh_check_all;
use crate::domain::entities::TreeIndex;
use crate::domain::value_objects::value_list::{contains_value, without_values};
use crate::domain::value_objects::{RefKey, ValueReportMode};

/// Values of every checked node in pre-order, minus uncheckable values
pub fn serialize_all<V: Clone + PartialEq>(
    index: &TreeIndex<V>,
    uncheckable_item_values: &[V],
) -> Vec<V> {
    let list: Vec<V> = index
        .iter()
        .filter(|n| n.check)
        .map(|n| n.value.clone())
        .collect();
    without_values(&list, uncheckable_item_values)
}

/// Values of checked nodes whose selection is not already implied by a fully
/// checked parent.
///
/// A checked child of a `check_all` parent is still reported when the parent
/// is an uncheckable group and the topmost ancestor is not checked: nothing
/// above the group carries the selection, so the child must.
pub fn serialize_only_parent<V: Clone + PartialEq>(
    index: &TreeIndex<V>,
    uncheckable_item_values: &[V],
) -> Vec<V> {
    let mut list = Vec::new();

    for node in index.iter().filter(|n| n.check) {
        let reported = match index.parent(&node.ref_key) {
            None => true,
            Some(parent) if !parent.check_all => true,
            Some(parent) => {
                parent.uncheckable
                    && !index
                        .top_ancestor(&node.ref_key)
                        .is_some_and(|top| top.check)
            }
        };
        if reported {
            list.push(node.value.clone());
        }
    }

    without_values(&list, uncheckable_item_values)
}

/// Serialize with the given report mode
pub fn serialize<V: Clone + PartialEq>(
    index: &TreeIndex<V>,
    mode: ValueReportMode,
    uncheckable_item_values: &[V],
) -> Vec<V> {
    match mode {
        ValueReportMode::OnlyParent => serialize_only_parent(index, uncheckable_item_values),
        ValueReportMode::All => serialize_all(index, uncheckable_item_values),
    }
}

/// Reset every `check` flag and repopulate it from `values`.
///
/// Runs top-down: under cascade a node first inherits its parent's freshly
/// reset flag, then an exact structural match sets it. Values that are also
/// uncheckable never match. Uncheckable nodes stay unchecked and hand the
/// flag they inherited straight through to their children.
pub fn unserialize<V: PartialEq>(
    index: &mut TreeIndex<V>,
    values: &[V],
    cascade: bool,
    uncheckable_item_values: &[V],
) {
    let keys: Vec<RefKey> = index.keys().cloned().collect();
    let mut passed_down: HashMap<RefKey, bool> = HashMap::with_capacity(keys.len());

    for key in keys {
        let Some(node) = index.get_mut(&key) else {
            continue;
        };

        let inherited = cascade
            && node
                .parent
                .as_ref()
                .and_then(|p| passed_down.get(p).copied())
                .unwrap_or(false);
        let matched = contains_value(values, &node.value)
            && !contains_value(uncheckable_item_values, &node.value);

        node.check = !node.uncheckable && (inherited || matched);
        let flag = if node.uncheckable { inherited } else { node.check };
        passed_down.insert(key, flag);
    }

    refresh_check_all(index, cascade);
    tracing::debug!(values = values.len(), cascade, "unserialized selection");
}
