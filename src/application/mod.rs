//! Application Layer
//!
//! Orchestrates the domain services for callers.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain propagation or serialization rules (those are in Domain)
//! - Owns the state that lives between interactions
//!
//! ## Components
//!
//! - `CheckTree` - Engine facade: index, selection, expand and search state
//! - `CheckTreeOptions` - Behaviour switches for one engine instance

pub mod check_tree;

pub use check_tree::{CheckTree, CheckTreeOptions};
