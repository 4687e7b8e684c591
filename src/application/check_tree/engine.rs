//! CheckTree engine
//!
//! Owns the caller's tree, the flat index built from it, the current
//! selection and the search state, and wires the domain services together:
//!
//! 1. Flatten the tree into the index (`flatten`)
//! 2. Populate check flags from the value list (`unserialize`)
//! 3. On a toggle, propagate on a copy of the index and serialize it back
//! 4. Recompute visibility whenever the tree or the keyword changes

use crate::domain::entities::{IndexedNode, TreeIndex};
use crate::domain::ports::{CheckTreeEvent, CheckTreeEventSink, NodeAccessor, NoopEventSink};
use crate::domain::services::{
    filter, flatten, refresh_check_all, resolve, serialize, toggle, unserialize, FlattenOptions,
    Visibility,
};
use crate::domain::value_objects::value_list::{same_values, without_values};
use crate::domain::value_objects::{CheckState, RefKey};
use crate::error::{CheckTreeError, CheckTreeResult};

use super::options::CheckTreeOptions;

/// Stateful check-tree engine over caller-owned nodes
pub struct CheckTree<A: NodeAccessor> {
    accessor: A,
    data: Vec<A::Node>,
    options: CheckTreeOptions<A::Value>,
    index: TreeIndex<A::Value>,
    /// Current selection, already stripped of uncheckable values
    value: Vec<A::Value>,
    /// Keyword tracked internally while the search is not externally driven
    keyword: String,
    visibility: Visibility,
    sink: Box<dyn CheckTreeEventSink<A::Value>>,
}

impl<A: NodeAccessor> CheckTree<A> {
    pub fn new(data: Vec<A::Node>, accessor: A, options: CheckTreeOptions<A::Value>) -> Self {
        let initial = options
            .value
            .clone()
            .unwrap_or_else(|| options.default_value.clone());
        let value = without_values(&initial, &options.uncheckable_item_values);

        let mut tree = Self {
            accessor,
            data,
            options,
            index: TreeIndex::new(),
            value,
            keyword: String::new(),
            visibility: Visibility::default(),
            sink: Box::new(NoopEventSink),
        };
        tree.rebuild(false);
        tree.apply_value();
        tree.refilter();
        tree
    }

    /// Route engine events to `sink`
    pub fn with_event_sink(mut self, sink: impl CheckTreeEventSink<A::Value> + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    // ------------------------------------------------------------------
    // Caller-driven updates
    // ------------------------------------------------------------------

    /// Swap the whole tree. Ref keys handed out before are stale afterwards.
    pub fn set_data(&mut self, data: Vec<A::Node>) {
        self.data = data;
        self.rebuild(false);
        self.apply_value();
        self.refilter();
    }

    /// Replace the selection and repopulate check flags from it
    pub fn set_value(&mut self, values: Vec<A::Value>) {
        self.value = without_values(&values, &self.options.uncheckable_item_values);
        if self.options.is_controlled() {
            self.options.value = Some(values);
        }
        self.apply_value();
    }

    pub fn set_uncheckable_item_values(&mut self, values: Vec<A::Value>) {
        if same_values(&self.options.uncheckable_item_values, &values) {
            return;
        }
        self.options.uncheckable_item_values = values;
        self.rebuild(true);

        let current = std::mem::take(&mut self.value);
        self.value = without_values(&current, &self.options.uncheckable_item_values);
        self.apply_value();
    }

    pub fn set_disabled_item_values(&mut self, values: Vec<A::Value>) {
        self.options.disabled_item_values = values;
    }

    /// Switch cascade mode.
    ///
    /// Turning it on re-derives the flags from the value list so implied
    /// children get checked. Turning it off keeps every flag as it is and
    /// only drops the completion caches, which mean nothing without cascade.
    pub fn set_cascade(&mut self, cascade: bool) {
        if self.options.cascade == cascade {
            return;
        }
        self.options.cascade = cascade;
        if cascade {
            self.apply_value();
        } else {
            refresh_check_all(&mut self.index, false);
        }
    }

    /// Controlled "expand all"; `None` hands control back to per-node flags
    pub fn set_expand_all(&mut self, expand_all: Option<bool>) {
        self.options.expand_all = expand_all;
    }

    /// Drive the search keyword from outside; `None` returns to internal tracking
    pub fn set_search_keyword(&mut self, keyword: Option<String>) {
        self.options.search_keyword = keyword;
        self.refilter();
    }

    // ------------------------------------------------------------------
    // User interactions
    // ------------------------------------------------------------------

    /// Check or uncheck a node and return the resulting value list.
    ///
    /// Uncontrolled engines adopt the new list immediately. Controlled
    /// engines only report it; flags change once the caller feeds it back
    /// through `set_value`.
    pub fn select(&mut self, ref_key: &RefKey, checked: bool) -> CheckTreeResult<Vec<A::Value>> {
        let node = self.require(ref_key)?;
        if node.is_disabled(&self.options.disabled_item_values) {
            return Err(CheckTreeError::NodeDisabled {
                ref_key: ref_key.to_string(),
            });
        }
        let layer = node.layer();

        let next = toggle(&self.index, ref_key, checked, self.options.cascade);
        let values = serialize(
            &next,
            self.options.report_mode,
            &self.options.uncheckable_item_values,
        );
        tracing::debug!(%ref_key, checked, values = values.len(), "select");

        if !self.options.is_controlled() {
            self.index = next;
            self.value = values.clone();
            self.apply_value();
        }

        self.sink.on_event(CheckTreeEvent::Changed {
            values: values.clone(),
        });
        self.sink.on_event(CheckTreeEvent::Selected {
            ref_key: ref_key.clone(),
            layer,
            checked,
            values: values.clone(),
        });
        Ok(values)
    }

    /// Open or close a node
    pub fn toggle_expand(&mut self, ref_key: &RefKey, expanded: bool) -> CheckTreeResult<()> {
        let node = self
            .index
            .get_mut(ref_key)
            .ok_or_else(|| unknown_node(ref_key))?;
        node.expand = expanded;

        let event = CheckTreeEvent::Expanded {
            ref_key: ref_key.clone(),
            layer: node.layer(),
            expanded,
            value: node.value.clone(),
        };
        tracing::debug!(%ref_key, expanded, "toggle expand");
        self.sink.on_event(event);
        Ok(())
    }

    /// Append lazily loaded `children` to the node at `ref_key` and rebuild.
    ///
    /// Expand flags of nodes that survive the rebuild are kept, so the node
    /// that triggered the load stays open. Fails with `InvalidData` when the
    /// node cannot hold children; the caller's tree is left untouched then.
    pub fn concat_children(
        &mut self,
        ref_key: &RefKey,
        children: Vec<A::Node>,
    ) -> CheckTreeResult<()> {
        let target = locate_mut(&self.accessor, &mut self.data, ref_key.path())
            .ok_or_else(|| unknown_node(ref_key))?;
        let added = children.len();
        self.accessor
            .children_vec_mut(target)
            .ok_or_else(|| CheckTreeError::InvalidData {
                message: format!("node '{}' cannot hold children", ref_key),
            })?
            .extend(children);

        tracing::debug!(%ref_key, added, "concat children");
        self.rebuild(true);
        self.apply_value();
        self.refilter();
        Ok(())
    }

    /// Record a keyword change. Filtering only follows it while the keyword
    /// is not externally driven.
    pub fn search(&mut self, keyword: &str) {
        if self.options.search_keyword.is_none() {
            self.keyword = keyword.to_string();
            self.refilter();
        }
        tracing::debug!(keyword, "search");
        self.sink.on_event(CheckTreeEvent::Searched {
            keyword: keyword.to_string(),
        });
    }

    /// Clear the selection
    pub fn clean(&mut self) {
        self.value.clear();
        self.apply_value();
        self.sink.on_event(CheckTreeEvent::Changed { values: Vec::new() });
    }

    /// Reset the internally tracked keyword (dropdown closed)
    pub fn close(&mut self) {
        if self.options.search_keyword.is_none() && !self.keyword.is_empty() {
            self.keyword.clear();
            self.refilter();
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Tri-state display of a node; unknown keys are unchecked
    pub fn check_state(&self, ref_key: &RefKey) -> CheckState {
        resolve(&self.index, ref_key, self.options.cascade)
    }

    pub fn selected_values(&self) -> &[A::Value] {
        &self.value
    }

    /// First node carrying each selected value, in selection order
    pub fn selected_items(&self) -> Vec<&IndexedNode<A::Value>> {
        self.value
            .iter()
            .filter_map(|v| self.index.find_by_value(v).next())
            .collect()
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn is_disabled(&self, ref_key: &RefKey) -> bool {
        self.index
            .get(ref_key)
            .is_some_and(|n| n.is_disabled(&self.options.disabled_item_values))
    }

    /// Effective expand state. Only nodes with children can be open; a
    /// controlled "expand all" overrides the stored flag.
    pub fn is_expanded(&self, ref_key: &RefKey) -> bool {
        self.index.get(ref_key).is_some_and(|n| {
            n.has_children() && self.options.expand_all.unwrap_or(n.expand)
        })
    }

    pub fn is_visible(&self, ref_key: &RefKey) -> bool {
        self.visibility.is_visible(ref_key)
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// `false` when the keyword hides every node
    pub fn has_results(&self) -> bool {
        self.visibility.any_visible()
    }

    /// Keyword currently applied to the filter
    pub fn keyword(&self) -> &str {
        self.options
            .search_keyword
            .as_deref()
            .unwrap_or(&self.keyword)
    }

    pub fn node(&self, ref_key: &RefKey) -> Option<&IndexedNode<A::Value>> {
        self.index.get(ref_key)
    }

    pub fn index(&self) -> &TreeIndex<A::Value> {
        &self.index
    }

    /// The caller's tree, with ref keys recorded on every node
    pub fn data(&self) -> &[A::Node] {
        &self.data
    }

    pub fn into_data(self) -> Vec<A::Node> {
        self.data
    }

    pub fn options(&self) -> &CheckTreeOptions<A::Value> {
        &self.options
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn require(&self, ref_key: &RefKey) -> CheckTreeResult<&IndexedNode<A::Value>> {
        self.index.get(ref_key).ok_or_else(|| unknown_node(ref_key))
    }

    fn rebuild(&mut self, keep_expand: bool) {
        let options = FlattenOptions {
            uncheckable_item_values: &self.options.uncheckable_item_values,
            expand_all: self.options.effective_expand_all(),
        };
        let mut index = flatten(&self.accessor, &mut self.data, &options);

        if keep_expand {
            for node in index.iter_mut() {
                if let Some(previous) = self.index.get(&node.ref_key) {
                    node.expand = previous.expand;
                }
            }
        }
        self.index = index;
    }

    fn apply_value(&mut self) {
        unserialize(
            &mut self.index,
            &self.value,
            self.options.cascade,
            &self.options.uncheckable_item_values,
        );
    }

    fn refilter(&mut self) {
        self.visibility = filter(&self.accessor, &self.data, self.keyword());
    }
}

fn unknown_node(ref_key: &RefKey) -> CheckTreeError {
    CheckTreeError::UnknownNode {
        ref_key: ref_key.to_string(),
    }
}

/// Follow `path` (child ordinals from the root down) into the caller's tree
fn locate_mut<'a, A: NodeAccessor>(
    accessor: &A,
    nodes: &'a mut [A::Node],
    path: &[usize],
) -> Option<&'a mut A::Node> {
    let (first, rest) = path.split_first()?;
    let node = nodes.get_mut(*first)?;
    match rest {
        [] => Some(node),
        _ => locate_mut(accessor, accessor.children_mut(node)?, rest),
    }
}
