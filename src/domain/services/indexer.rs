//! Node indexer
//!
//! Walks the caller's tree once and builds the flat `TreeIndex`. Every node,
//! leaf or not, receives exactly one entry whose ref key is derived solely
//! from its structural position, so re-flattening the same tree yields an
//! equal index.

use crate::domain::entities::{IndexedNode, TreeIndex};
use crate::domain::ports::NodeAccessor;
use crate::domain::value_objects::value_list::contains_value;
use crate::domain::value_objects::RefKey;

/// Options consulted while flattening
#[derive(Debug)]
pub struct FlattenOptions<'a, V> {
    /// Values whose checkbox is inert
    pub uncheckable_item_values: &'a [V],
    /// Effective "expand all" (controlled `expand_all`, else `default_expand_all`)
    pub expand_all: bool,
}

/// Build the index for `roots`, writing each node's ref key back onto it
pub fn flatten<A: NodeAccessor>(
    accessor: &A,
    roots: &mut [A::Node],
    options: &FlattenOptions<'_, A::Value>,
) -> TreeIndex<A::Value> {
    let mut index = TreeIndex::new();
    walk(accessor, roots, None, options, &mut index);
    tracing::debug!(nodes = index.len(), "flattened tree");
    index
}

fn walk<A: NodeAccessor>(
    accessor: &A,
    nodes: &mut [A::Node],
    parent: Option<&RefKey>,
    options: &FlattenOptions<'_, A::Value>,
    index: &mut TreeIndex<A::Value>,
) -> Vec<RefKey> {
    let mut keys = Vec::with_capacity(nodes.len());

    for (ordinal, node) in nodes.iter_mut().enumerate() {
        let ref_key = match parent {
            Some(p) => p.child(ordinal),
            None => RefKey::root(ordinal),
        };
        accessor.set_ref_key(node, &ref_key);

        let value = accessor.value(node);
        let label = accessor.label_text(node).unwrap_or_default();
        let mut entry = IndexedNode::new(ref_key.clone(), label, value);
        entry.parent = parent.cloned();
        entry.uncheckable = contains_value(options.uncheckable_item_values, &entry.value);
        entry.expand = initial_expand(accessor, node, options.expand_all);

        entry.children = match accessor.children_mut(node) {
            Some(children) => walk(accessor, children, Some(&ref_key), options, index),
            None => Vec::new(),
        };

        index.insert(entry);
        keys.push(ref_key);
    }

    keys
}

/// Initial expand state: only nodes with children can be open. The node's own
/// hint wins over "expand all".
fn initial_expand<A: NodeAccessor>(accessor: &A, node: &A::Node, expand_all: bool) -> bool {
    let has_children = accessor.children(node).is_some_and(|c| !c.is_empty());
    if !has_children {
        return false;
    }
    accessor.expand_hint(node).unwrap_or(expand_all)
}
