//! CheckTree Options
//!
//! Behaviour switches for one engine instance.

use crate::domain::value_objects::ValueReportMode;

/// Options for the check-tree engine
#[derive(Debug, Clone, PartialEq)]
pub struct CheckTreeOptions<V> {
    /// Propagate toggles down to descendants and up to ancestors
    pub cascade: bool,
    /// Values whose checkbox is inert
    pub uncheckable_item_values: Vec<V>,
    /// Values whose node is not interactive at all
    pub disabled_item_values: Vec<V>,
    /// Controlled "expand all"; overrides every per-node expand flag when set
    pub expand_all: Option<bool>,
    /// Initial expand state for nodes without their own hint
    pub default_expand_all: bool,
    /// Externally driven search keyword. When set, `search` only notifies.
    pub search_keyword: Option<String>,
    /// Controlled selection. The index only follows `set_value` calls.
    pub value: Option<Vec<V>>,
    /// Initial selection when uncontrolled
    pub default_value: Vec<V>,
    /// Shape of the value list produced by `select`
    pub report_mode: ValueReportMode,
}

impl<V> Default for CheckTreeOptions<V> {
    fn default() -> Self {
        Self {
            cascade: true,
            uncheckable_item_values: Vec::new(),
            disabled_item_values: Vec::new(),
            expand_all: None,
            default_expand_all: false,
            search_keyword: None,
            value: None,
            default_value: Vec::new(),
            report_mode: ValueReportMode::default(),
        }
    }
}

impl<V> CheckTreeOptions<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cascade(mut self, cascade: bool) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn with_uncheckable_item_values(mut self, values: Vec<V>) -> Self {
        self.uncheckable_item_values = values;
        self
    }

    pub fn with_disabled_item_values(mut self, values: Vec<V>) -> Self {
        self.disabled_item_values = values;
        self
    }

    pub fn with_expand_all(mut self, expand_all: Option<bool>) -> Self {
        self.expand_all = expand_all;
        self
    }

    pub fn with_default_expand_all(mut self, expand: bool) -> Self {
        self.default_expand_all = expand;
        self
    }

    pub fn with_search_keyword(mut self, keyword: Option<String>) -> Self {
        self.search_keyword = keyword;
        self
    }

    /// Switch to controlled mode with the given selection
    pub fn with_value(mut self, values: Vec<V>) -> Self {
        self.value = Some(values);
        self
    }

    pub fn with_default_value(mut self, values: Vec<V>) -> Self {
        self.default_value = values;
        self
    }

    pub fn with_report_mode(mut self, mode: ValueReportMode) -> Self {
        self.report_mode = mode;
        self
    }

    /// Selection is owned by the caller
    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    /// Expand state applied to nodes without their own hint
    pub fn effective_expand_all(&self) -> bool {
        self.expand_all.unwrap_or(self.default_expand_all)
    }
}
