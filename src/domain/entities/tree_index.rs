//! TreeIndex entity - flat arena of indexed nodes
//!
//! The index maps every ref key to its `IndexedNode`. Because `RefKey`
//! orders as depth-first pre-order, iterating the index visits parents before
//! their children, which the top-down reset in `unserialize` relies on.

use std::collections::btree_map;
use std::collections::BTreeMap;

use super::IndexedNode;
use crate::domain::value_objects::RefKey;

/// Flat `RefKey -> IndexedNode` mapping for one tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeIndex<V> {
    nodes: BTreeMap<RefKey, IndexedNode<V>>,
}

impl<V> Default for TreeIndex<V> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }
}

impl<V> TreeIndex<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, node: IndexedNode<V>) {
        self.nodes.insert(node.ref_key.clone(), node);
    }

    pub fn get(&self, key: &RefKey) -> Option<&IndexedNode<V>> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: &RefKey) -> Option<&mut IndexedNode<V>> {
        self.nodes.get_mut(key)
    }

    pub fn contains(&self, key: &RefKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in pre-order
    pub fn iter(&self) -> btree_map::Values<'_, RefKey, IndexedNode<V>> {
        self.nodes.values()
    }

    /// Mutable nodes in pre-order
    pub fn iter_mut(&mut self) -> btree_map::ValuesMut<'_, RefKey, IndexedNode<V>> {
        self.nodes.values_mut()
    }

    /// Ref keys in pre-order
    pub fn keys(&self) -> btree_map::Keys<'_, RefKey, IndexedNode<V>> {
        self.nodes.keys()
    }

    /// Nodes without a parent, in order
    pub fn roots(&self) -> impl Iterator<Item = &IndexedNode<V>> + '_ {
        self.nodes.values().filter(|n| n.is_root())
    }

    pub fn parent(&self, key: &RefKey) -> Option<&IndexedNode<V>> {
        let parent_key = self.nodes.get(key)?.parent.as_ref()?;
        self.nodes.get(parent_key)
    }

    /// Direct children of `key`, in order
    pub fn children<'a>(&'a self, key: &RefKey) -> impl Iterator<Item = &'a IndexedNode<V>> + 'a {
        self.nodes
            .get(key)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |k| self.nodes.get(k))
    }

    /// Ancestor keys from the parent up to the root
    pub fn ancestors(&self, key: &RefKey) -> Vec<RefKey> {
        let mut chain = Vec::new();
        let mut current = self.nodes.get(key).and_then(|n| n.parent.clone());
        while let Some(k) = current {
            current = self.nodes.get(&k).and_then(|n| n.parent.clone());
            chain.push(k);
        }
        chain
    }

    /// The root of the chain containing `key` (the node itself for roots)
    pub fn top_ancestor(&self, key: &RefKey) -> Option<&IndexedNode<V>> {
        match self.ancestors(key).last() {
            Some(root) => self.nodes.get(root),
            None => self.nodes.get(key),
        }
    }

    /// Whether at least one first-level node has children
    pub fn some_root_has_children(&self) -> bool {
        self.roots().any(|n| n.has_children())
    }
}

impl<V: PartialEq> TreeIndex<V> {
    /// Nodes whose value structurally equals `value`, in pre-order
    pub fn find_by_value<'a>(
        &'a self,
        value: &'a V,
    ) -> impl Iterator<Item = &'a IndexedNode<V>> + 'a {
        self.nodes.values().filter(move |n| &n.value == value)
    }
}

impl<'a, V> IntoIterator for &'a TreeIndex<V> {
    type Item = &'a IndexedNode<V>;
    type IntoIter = btree_map::Values<'a, RefKey, IndexedNode<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.values()
    }
}
