//! Domain Layer
//!
//! The check-tree engine proper, with no I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The flat node index (`IndexedNode`, `TreeIndex`)
//! - `value_objects/` - Immutable value types (`RefKey`, `CheckState`, `ValueReportMode`)
//! - `services/` - Indexer, propagator, serializer, tri-state resolver, visibility filter
//! - `ports/` - Node accessor and event sink traits
//!
//! Caller trees are only ever reached through a `NodeAccessor`; the only
//! write the domain performs on them is recording each node's ref key.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
