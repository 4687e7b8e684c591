use anyhow::{Context as _, Result};
use serde_json::Value;

use checktree::infrastructure::events::JsonEventSink;
use checktree::infrastructure::TracingEventSink;
use checktree::presentation::cli::TreeArgs;
use checktree::RefKey;

use super::{display_value, Context};

pub fn cmd_toggle(ctx: &Context, args: &TreeArgs, node: &str, uncheck: bool) -> Result<()> {
    let ref_key: RefKey = node.parse()?;
    let tree = ctx.build_tree(args)?;
    let mut tree = if ctx.json {
        tree.with_event_sink(JsonEventSink::stdout())
    } else {
        tree.with_event_sink(TracingEventSink)
    };

    let values = tree
        .select(&ref_key, !uncheck)
        .with_context(|| format!("Failed to toggle node {}", ref_key))?;

    // JSON mode already printed the change and select events
    if !ctx.json {
        print_values(&values);
    }
    Ok(())
}

fn print_values(values: &[Value]) {
    if values.is_empty() {
        println!("(nothing selected)");
    }
    for value in values {
        println!("{}", display_value(value));
    }
}
