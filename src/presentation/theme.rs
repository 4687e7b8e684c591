//! Design tokens for rendered trees.
//!
//! All icons must be sourced from this module.

pub mod icons {
    // Check states.
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";
    pub const INDETERMINATE: &str = "◐";

    // Tree expansion.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
}

pub mod icons_ascii {
    // Check states.
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
    pub const INDETERMINATE: &str = "[-]";

    // Tree expansion.
    pub const EXPANDED: &str = "[v]";
    pub const COLLAPSED: &str = "[>]";
}

/// Icon set chosen once per output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub indeterminate: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                checked: icons::CHECKED,
                unchecked: icons::UNCHECKED,
                indeterminate: icons::INDETERMINATE,
                expanded: icons::EXPANDED,
                collapsed: icons::COLLAPSED,
            }
        } else {
            Self {
                checked: icons_ascii::CHECKED,
                unchecked: icons_ascii::UNCHECKED,
                indeterminate: icons_ascii::INDETERMINATE,
                expanded: icons_ascii::EXPANDED,
                collapsed: icons_ascii::COLLAPSED,
            }
        }
    }
}
