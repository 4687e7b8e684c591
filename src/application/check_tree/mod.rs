//! CheckTree
//!
//! The stateful engine facade: one instance per rendered tree control.

mod engine;
mod options;

pub use engine::CheckTree;
pub use options::CheckTreeOptions;
