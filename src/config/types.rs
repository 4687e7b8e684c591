//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::CheckTreeOptions;
use crate::domain::value_objects::ValueReportMode;
use crate::error::CheckTreeResult;
use crate::infrastructure::json::JsonAccessor;

use super::loader::{self, ConfigWarning};

/// Engine configuration as read from `.checktree.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckTreeConfig {
    #[serde(default = "default_true")]
    pub cascade: bool,

    #[serde(default = "default_value_key")]
    pub value_key: String,

    #[serde(default = "default_label_key")]
    pub label_key: String,

    #[serde(default = "default_children_key")]
    pub children_key: String,

    #[serde(default)]
    pub uncheckable_item_values: Vec<Value>,

    #[serde(default)]
    pub disabled_item_values: Vec<Value>,

    /// Controlled "expand all"; absent means per-node flags decide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_all: Option<bool>,

    #[serde(default)]
    pub default_expand_all: bool,

    /// Externally driven keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_keyword: Option<String>,

    #[serde(default)]
    pub report_mode: ValueReportMode,
}

impl Default for CheckTreeConfig {
    fn default() -> Self {
        Self {
            cascade: true,
            value_key: default_value_key(),
            label_key: default_label_key(),
            children_key: default_children_key(),
            uncheckable_item_values: Vec::new(),
            disabled_item_values: Vec::new(),
            expand_all: None,
            default_expand_all: false,
            search_keyword: None,
            report_mode: ValueReportMode::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_value_key() -> String {
    "value".to_string()
}

fn default_label_key() -> String {
    "label".to_string()
}

fn default_children_key() -> String {
    "children".to_string()
}

impl CheckTreeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CheckTreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CheckTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (CHECKTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// JSON accessor using the configured field names
    pub fn accessor(&self) -> JsonAccessor {
        JsonAccessor::new(&self.value_key, &self.label_key, &self.children_key)
    }

    /// Engine options carrying every configured switch
    pub fn options(&self) -> CheckTreeOptions<Value> {
        CheckTreeOptions::new()
            .with_cascade(self.cascade)
            .with_uncheckable_item_values(self.uncheckable_item_values.clone())
            .with_disabled_item_values(self.disabled_item_values.clone())
            .with_expand_all(self.expand_all)
            .with_default_expand_all(self.default_expand_all)
            .with_search_keyword(self.search_keyword.clone())
            .with_report_mode(self.report_mode)
    }
}
