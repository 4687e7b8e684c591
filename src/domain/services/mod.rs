//! Domain Services
//!
//! Pure algorithms over the tree index. None of them touch I/O and all of
//! them run to completion synchronously.

pub mod indexer;
pub mod propagator;
pub mod serializer;
pub mod tri_state;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_support;

pub use indexer::{flatten, FlattenOptions};
pub use propagator::{refresh_check_all, toggle};
pub use serializer::{serialize, serialize_all, serialize_only_parent, unserialize};
pub use tri_state::resolve;
pub use visibility::{filter, should_display, Visibility};
