//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Text rendering of the engine state
//! - Icon selection for the output stream
//!
//! ## Structure
//!
//! - `cli` - Argument definitions for the `checktree` binary
//! - `render` - Row rendering with tri-state and expand icons
//! - `theme` - Icon tokens (unicode and ASCII)
//! - `terminal` - Output stream capability detection

pub mod cli;
pub mod render;
pub mod terminal;
pub mod theme;

pub use render::{render_node, render_tree, visible_rows, NO_RESULTS};
pub use theme::Icons;
