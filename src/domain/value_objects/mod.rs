//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod check_state;
mod ref_key;
mod report_mode;
pub mod value_list;

pub use check_state::CheckState;
pub use ref_key::{RefKey, ROOT_SENTINEL};
pub use report_mode::ValueReportMode;
