//! Check-state propagator
//!
//! Applies a user toggle to a copy of the index. The downward pass pushes
//! the new value through the target's subtree; the upward pass recomputes
//! every ancestor's `check`/`check_all` from its direct children.
//!
//! Uncheckable nodes never have `check` written and never count towards
//! their parent's completion. Their `check_all` cache is still maintained
//! because the parent-only serialization reads it to detect selection chains
//! broken by an uncheckable group.

use crate::domain::entities::TreeIndex;
use crate::domain::value_objects::RefKey;

/// Toggle `target` to `checked` on a fresh copy of `index`.
///
/// The index passed in is left untouched so the previous render's snapshot
/// stays valid. An unknown `target` yields an unchanged copy.
pub fn toggle<V: Clone>(
    index: &TreeIndex<V>,
    target: &RefKey,
    checked: bool,
    cascade: bool,
) -> TreeIndex<V> {
    let mut next = index.clone();

    let Some(parent) = next.get(target).map(|n| n.parent.clone()) else {
        tracing::warn!(%target, "toggle on a node missing from the index; rebuild the index after changing the tree");
        return next;
    };

    propagate_down(&mut next, target, checked, cascade);
    if cascade {
        if let Some(parent) = parent {
            propagate_up(&mut next, &parent, checked);
        }
    }
    next
}

/// Set `key` and, under cascade, its whole subtree to `checked`.
///
/// An uncheckable node keeps its `check` flag but still gets `check_all`
/// written: the cache tells the parent-only serialization whether the
/// group's members are complete, so it has to follow the cascade like any
/// other group.
pub fn propagate_down<V>(index: &mut TreeIndex<V>, key: &RefKey, checked: bool, cascade: bool) {
    let Some(node) = index.get_mut(key) else {
        return;
    };

    if !node.uncheckable {
        node.check = checked;
    }

    if !cascade || !node.has_children() {
        node.check_all = false;
        return;
    }

    node.check_all = checked;
    let children = node.children.clone();
    tracing::trace!(%key, checked, children = children.len(), "propagate down");
    for child in &children {
        propagate_down(index, child, checked, cascade);
    }
}

/// Recompute `key` and every ancestor above it after a toggle to `checked`.
///
/// Unchecking clears the whole chain. Checking completes an ancestor only
/// when all of its checkable direct children are checked, otherwise it is
/// cleared.
pub fn propagate_up<V>(index: &mut TreeIndex<V>, key: &RefKey, checked: bool) {
    let complete = checked && every_child_satisfied(index, key);

    let Some(node) = index.get_mut(key) else {
        return;
    };
    if !node.uncheckable {
        node.check = complete;
    }
    node.check_all = complete;
    tracing::trace!(%key, complete, "propagate up");

    if let Some(parent) = node.parent.clone() {
        propagate_up(index, &parent, checked);
    }
}

/// Recompute every `check_all` cache from the `check` flags, bottom-up.
///
/// Run after flags are rewritten wholesale (unserialize) so the cache agrees
/// with the flags again. A node is complete when it is checked (or is an
/// uncheckable group) and every checkable child is checked and, if it has
/// children of its own, complete as well.
pub fn refresh_check_all<V>(index: &mut TreeIndex<V>, cascade: bool) {
    let keys: Vec<RefKey> = index.keys().rev().cloned().collect();

    // reverse pre-order visits every child before its parent
    for key in keys {
        let complete = cascade
            && index
                .get(&key)
                .is_some_and(|n| n.has_children() && (n.check || n.uncheckable))
            && index
                .children(&key)
                .filter(|child| !child.uncheckable)
                .all(|child| child.check && (child.check_all || !child.has_children()));

        if let Some(node) = index.get_mut(&key) {
            node.check_all = complete;
        }
    }
}

/// Every checkable direct child of `key` is checked.
///
/// Uncheckable children are skipped, groups included; vacuously true when
/// there is no checkable child.
pub fn every_child_satisfied<V>(index: &TreeIndex<V>, key: &RefKey) -> bool {
    index
        .children(key)
        .filter(|child| !child.uncheckable)
        .all(|child| child.check)
}
