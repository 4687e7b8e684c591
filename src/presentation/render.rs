//! Text rendering for check trees.
//!
//! Renders the rows a tree control would show for the engine's current
//! state: check icons, expand icons and indentation by layer.

use crate::application::CheckTree;
use crate::domain::entities::IndexedNode;
use crate::domain::ports::NodeAccessor;
use crate::domain::value_objects::CheckState;

use super::theme::Icons;

/// Shown instead of rows when the search hides every node
pub const NO_RESULTS: &str = "No results found";

/// Render a single row.
///
/// `flat` drops the expander column entirely, for trees whose roots are all
/// leaves.
pub fn render_node<V>(
    node: &IndexedNode<V>,
    state: CheckState,
    expanded: bool,
    disabled: bool,
    flat: bool,
    icons: &Icons,
) -> String {
    let indent = "  ".repeat(node.layer());

    // Expansion icon (only for nodes with children)
    let expand_icon = if flat {
        String::new()
    } else if node.has_children() {
        let icon = if expanded {
            icons.expanded
        } else {
            icons.collapsed
        };
        format!("{} ", icon)
    } else {
        " ".repeat(icons.expanded.chars().count() + 1)
    };

    // Uncheckable nodes have no checkbox at all
    let check_icon = if node.uncheckable {
        String::new()
    } else {
        let icon = match state {
            CheckState::Checked => icons.checked,
            CheckState::Unchecked => icons.unchecked,
            CheckState::Indeterminate => icons.indeterminate,
        };
        format!("{} ", icon)
    };

    let suffix = if disabled { " (disabled)" } else { "" };
    format!("{}{}{}{}{}", indent, expand_icon, check_icon, node.label, suffix)
}

/// Nodes that get a row: visible under the keyword and reachable through
/// open ancestors. While a keyword is active every ancestor counts as open.
pub fn visible_rows<A: NodeAccessor>(tree: &CheckTree<A>) -> Vec<&IndexedNode<A::Value>> {
    let searching = is_searching(tree);
    tree.index()
        .iter()
        .filter(|node| {
            tree.is_visible(&node.ref_key)
                && (searching
                    || tree
                        .index()
                        .ancestors(&node.ref_key)
                        .iter()
                        .all(|k| tree.is_expanded(k)))
        })
        .collect()
}

/// Render every row, or `NO_RESULTS` when nothing is visible
pub fn render_tree<A: NodeAccessor>(tree: &CheckTree<A>, icons: &Icons) -> String {
    if !tree.has_results() {
        return NO_RESULTS.to_string();
    }

    let searching = is_searching(tree);
    let flat = !tree.index().some_root_has_children();
    visible_rows(tree)
        .into_iter()
        .map(|node| {
            let key = &node.ref_key;
            render_node(
                node,
                tree.check_state(key),
                searching || tree.is_expanded(key),
                tree.is_disabled(key),
                flat,
                icons,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_searching<A: NodeAccessor>(tree: &CheckTree<A>) -> bool {
    !tree.keyword().trim().is_empty()
}
