//! checktree CLI - inspect and drive check-tree selection state
//!
//! Usage: checktree <COMMAND>
//!
//! Commands:
//!   inspect  Render the tree with check and expand state
//!   toggle   Check or uncheck a node and print the new value list
//!   search   Print the ref keys visible under a keyword

mod commands;

use anyhow::Result;
use checktree::presentation::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context::load(&cli)?;
    match cli.command {
        Commands::Inspect {
            tree,
            keyword,
            expand_all,
        } => commands::inspect::cmd_inspect(&ctx, &tree, keyword.as_deref(), expand_all),
        Commands::Toggle {
            tree,
            node,
            uncheck,
        } => commands::toggle::cmd_toggle(&ctx, &tree, &node, uncheck),
        Commands::Search { tree, keyword } => commands::search::cmd_search(&ctx, &tree, &keyword),
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("checktree={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
