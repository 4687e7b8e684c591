//! Display check-state of a node

use serde::{Deserialize, Serialize};

/// Tri-state shown by a node's checkbox.
///
/// Only `check` flags are stored in the index; `Indeterminate` is derived for
/// display by the tri-state resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// Nothing checked (○)
    #[default]
    Unchecked,
    /// Node and every checkable descendant checked (●)
    Checked,
    /// Some but not all checkable descendants checked (◐)
    Indeterminate,
}

impl CheckState {
    /// Map a plain boolean flag
    pub fn from_flag(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

impl std::fmt::Display for CheckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckState::Unchecked => write!(f, "unchecked"),
            CheckState::Checked => write!(f, "checked"),
            CheckState::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
