//! IndexedNode entity - the engine-owned record for one tree node

use serde::Serialize;

use crate::domain::value_objects::value_list::contains_value;
use crate::domain::value_objects::RefKey;

/// One entry of the flat index, keyed by its ref key.
///
/// Parent and children are stored as ref keys into the same index, never as
/// owning pointers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedNode<V> {
    pub ref_key: RefKey,
    /// Flattened label text (empty when the label has no textual form)
    pub label: String,
    pub value: V,
    pub expand: bool,
    pub check: bool,
    /// This node and every non-uncheckable descendant are checked
    pub check_all: bool,
    /// Checkbox hidden and ignored
    pub uncheckable: bool,
    /// Back-reference to the enclosing node, `None` for roots
    pub parent: Option<RefKey>,
    pub children: Vec<RefKey>,
}

impl<V> IndexedNode<V> {
    pub fn new(ref_key: RefKey, label: String, value: V) -> Self {
        Self {
            ref_key,
            label,
            value,
            expand: false,
            check: false,
            check_all: false,
            uncheckable: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Depth of the node; roots are layer 0
    pub fn layer(&self) -> usize {
        self.ref_key.layer()
    }
}

impl<V: PartialEq> IndexedNode<V> {
    /// Disabled state is derived on demand, never stored
    pub fn is_disabled(&self, disabled_item_values: &[V]) -> bool {
        contains_value(disabled_item_values, &self.value)
    }
}
