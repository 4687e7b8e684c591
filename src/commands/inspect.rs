use anyhow::Result;
use serde_json::json;

use checktree::presentation::cli::TreeArgs;
use checktree::presentation::{render_tree, visible_rows};

use super::{display_value, emit, Context};

pub fn cmd_inspect(
    ctx: &Context,
    args: &TreeArgs,
    keyword: Option<&str>,
    expand_all: bool,
) -> Result<()> {
    let mut tree = ctx.build_tree(args)?;
    if expand_all {
        tree.set_expand_all(Some(true));
    }
    if let Some(keyword) = keyword {
        tree.search(keyword);
    }

    if ctx.json {
        let rows: Vec<_> = visible_rows(&tree)
            .into_iter()
            .map(|node| {
                json!({
                    "refKey": node.ref_key,
                    "label": node.label,
                    "layer": node.layer(),
                    "state": tree.check_state(&node.ref_key),
                    "expanded": tree.is_expanded(&node.ref_key),
                    "disabled": tree.is_disabled(&node.ref_key),
                    "uncheckable": node.uncheckable,
                })
            })
            .collect();
        emit(json!({
            "event": "inspect",
            "hasResults": tree.has_results(),
            "rows": rows,
            "values": tree.selected_values(),
        }));
        return Ok(());
    }

    println!("{}", render_tree(&tree, &ctx.icons));
    if tree.has_value() {
        let selected: Vec<String> = tree.selected_values().iter().map(display_value).collect();
        println!();
        println!("Selected: {}", selected.join(", "));
    }
    Ok(())
}
