//! Tri-state resolver
//!
//! Derives the checkbox display state of a node from its own flag and its
//! descendants' flags. Nothing here is stored; `Indeterminate` only exists
//! for display.

use crate::domain::entities::{IndexedNode, TreeIndex};
use crate::domain::value_objects::{CheckState, RefKey};

/// Display state of `key`.
///
/// Leaves, and every node when cascade is off, show their own flag. A node
/// whose children are all uncheckable also shows its own flag, so a group
/// without checkable members never looks permanently indeterminate.
/// Unknown keys resolve to `Unchecked`.
pub fn resolve<V>(index: &TreeIndex<V>, key: &RefKey, cascade: bool) -> CheckState {
    let Some(node) = index.get(key) else {
        return CheckState::Unchecked;
    };

    if !node.has_children() || !cascade {
        return CheckState::from_flag(node.check);
    }

    if every_child_checked(index, node) {
        CheckState::Checked
    } else if some_child_checked(index, node) {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    }
}

/// Every checkable child is fully checked, recursively
fn every_child_checked<V>(index: &TreeIndex<V>, node: &IndexedNode<V>) -> bool {
    let mut checkable = index
        .children(&node.ref_key)
        .filter(|child| !child.uncheckable)
        .peekable();

    if checkable.peek().is_none() {
        return node.check;
    }

    checkable.all(|child| {
        if child.has_children() {
            every_child_checked(index, child)
        } else {
            child.check
        }
    })
}

/// At least one descendant, at any depth, is checked
fn some_child_checked<V>(index: &TreeIndex<V>, node: &IndexedNode<V>) -> bool {
    index
        .children(&node.ref_key)
        .any(|child| child.check || some_child_checked(index, child))
}
