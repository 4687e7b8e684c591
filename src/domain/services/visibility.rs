//! Search visibility filter
//!
//! Computes a per-node `visible` flag for a keyword. A node is visible when
//! its own label matches or any descendant is visible. The caller's tree is
//! never touched: flags live in a side map keyed by structural position.

use std::collections::BTreeMap;

use crate::domain::ports::NodeAccessor;
use crate::domain::value_objects::RefKey;

/// Visibility of every node for one keyword
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    visible: BTreeMap<RefKey, bool>,
}

impl Visibility {
    /// `false` for nodes the filter hid and for keys it never saw
    pub fn is_visible(&self, key: &RefKey) -> bool {
        self.visible.get(key).copied().unwrap_or(false)
    }

    /// At least one node survived the filter; `false` means "no results"
    pub fn any_visible(&self) -> bool {
        self.visible.values().any(|v| *v)
    }

    /// Visible keys in pre-order
    pub fn visible_keys(&self) -> impl Iterator<Item = &RefKey> + '_ {
        self.visible
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Case-insensitive substring match of `keyword` against a label.
///
/// A blank keyword shows everything. A label with no textual form only shows
/// under a blank keyword.
pub fn should_display(label: Option<&str>, keyword: &str) -> bool {
    if keyword.trim().is_empty() {
        return true;
    }
    match label {
        Some(text) => text.to_lowercase().contains(&keyword.to_lowercase()),
        None => false,
    }
}

/// Annotate every node of `roots` for `keyword`
pub fn filter<A: NodeAccessor>(accessor: &A, roots: &[A::Node], keyword: &str) -> Visibility {
    let mut visibility = Visibility::default();
    walk(accessor, roots, None, keyword, &mut visibility.visible);
    tracing::debug!(
        keyword,
        visible = visibility.visible_keys().count(),
        nodes = visibility.len(),
        "filtered tree"
    );
    visibility
}

/// Returns whether any node in `nodes` ended up visible
fn walk<A: NodeAccessor>(
    accessor: &A,
    nodes: &[A::Node],
    parent: Option<&RefKey>,
    keyword: &str,
    visible: &mut BTreeMap<RefKey, bool>,
) -> bool {
    let mut any = false;

    for (ordinal, node) in nodes.iter().enumerate() {
        let key = match parent {
            Some(p) => p.child(ordinal),
            None => RefKey::root(ordinal),
        };

        // children first so their result can promote this node
        let child_visible = match accessor.children(node) {
            Some(children) => walk(accessor, children, Some(&key), keyword, visible),
            None => false,
        };
        let label = accessor.label_text(node);
        let shown = should_display(label.as_deref(), keyword) || child_visible;

        visible.insert(key, shown);
        any |= shown;
    }

    any
}
