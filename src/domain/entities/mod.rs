//! Domain Entities
//!
//! The engine-owned index built from the caller's tree.

mod indexed_node;
mod tree_index;

pub use indexed_node::IndexedNode;
pub use tree_index::TreeIndex;
