use anyhow::Result;
use serde_json::json;

use checktree::infrastructure::events::JsonEventSink;
use checktree::presentation::cli::TreeArgs;
use checktree::presentation::NO_RESULTS;

use super::{emit, Context};

pub fn cmd_search(ctx: &Context, args: &TreeArgs, keyword: &str) -> Result<()> {
    let tree = ctx.build_tree(args)?;
    let mut tree = if ctx.json {
        tree.with_event_sink(JsonEventSink::stdout())
    } else {
        tree
    };
    tree.search(keyword);

    let matches: Vec<_> = tree
        .visibility()
        .visible_keys()
        .filter_map(|key| tree.node(key))
        .collect();

    if ctx.json {
        let keys: Vec<_> = matches.iter().map(|n| &n.ref_key).collect();
        emit(json!({
            "event": "result",
            "hasResults": tree.has_results(),
            "refKeys": keys,
        }));
        return Ok(());
    }

    if matches.is_empty() {
        println!("{}", NO_RESULTS);
    }
    for node in matches {
        println!("{}\t{}", node.ref_key, node.label);
    }
    Ok(())
}
