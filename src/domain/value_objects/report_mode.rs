//! How the selected-value list is reported after a toggle

use serde::{Deserialize, Serialize};

/// Shape of the value list emitted after a user toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ValueReportMode {
    /// Omit descendants already implied by a fully checked ancestor
    #[default]
    OnlyParent,
    /// Every checked node
    All,
}

impl std::fmt::Display for ValueReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueReportMode::OnlyParent => write!(f, "only-parent"),
            ValueReportMode::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for ValueReportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "only-parent" | "only_parent" | "parent" => Ok(ValueReportMode::OnlyParent),
            "all" => Ok(ValueReportMode::All),
            other => Err(format!("unknown report mode '{}'", other)),
        }
    }
}
