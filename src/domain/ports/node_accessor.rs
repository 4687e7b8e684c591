//! NodeAccessor port - typed access into caller-owned tree nodes
//!
//! The engine never assumes field names on the caller's node type. Label,
//! value and children are reached through an accessor chosen once at
//! construction, so a typed node struct gets compile-time checked access and
//! a JSON tree gets configurable field names (see `JsonAccessor`).

use std::fmt::Debug;

use crate::domain::value_objects::RefKey;

/// Accessor configuration for one node type
pub trait NodeAccessor {
    /// Caller's node type
    type Node;
    /// Node value; equality is structural
    type Value: Clone + PartialEq + Debug;

    /// Textual content of the node's label.
    ///
    /// Composite labels are flattened to their text. `None` when the label has
    /// no textual form; such labels never match a search keyword.
    fn label_text(&self, node: &Self::Node) -> Option<String>;

    /// The node's value
    fn value(&self, node: &Self::Node) -> Self::Value;

    /// Ordered children.
    ///
    /// Returns `None` when the node has no children field or the field is not
    /// a sequence. Both cases make the node a leaf.
    fn children<'a>(&self, node: &'a Self::Node) -> Option<&'a [Self::Node]>;

    /// Mutable view of the same children `children` returns
    fn children_mut<'a>(&self, node: &'a mut Self::Node) -> Option<&'a mut [Self::Node]>;

    /// Children sequence, creating an empty one when the node has none yet.
    ///
    /// Used to splice lazily loaded children into a node. Returns `None` when
    /// the node cannot hold children without losing data.
    fn children_vec_mut<'a>(&self, node: &'a mut Self::Node) -> Option<&'a mut Vec<Self::Node>>;

    /// The node's own `expand` hint, if it carries one
    fn expand_hint(&self, node: &Self::Node) -> Option<bool>;

    /// Record the synthetic ref key on the caller's node.
    ///
    /// This is the only mutation the engine performs on caller-owned data.
    /// Must be idempotent: the same position always writes the same key.
    fn set_ref_key(&self, node: &mut Self::Node, key: &RefKey);
}
