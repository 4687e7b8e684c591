//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config, --ascii) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// checktree - inspect and drive check-tree selection state
#[derive(Parser, Debug)]
#[command(name = "checktree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts (NDJSON)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to .checktree.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Force ASCII icons
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Tree and selection inputs shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// JSON file holding the tree (array of root nodes)
    #[arg(short, long)]
    pub data: PathBuf,

    /// JSON file holding the selected values (array)
    #[arg(long)]
    pub value: Option<PathBuf>,

    /// Disable cascade for this run
    #[arg(long)]
    pub no_cascade: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree with check and expand state
    Inspect {
        #[command(flatten)]
        tree: TreeArgs,

        /// Search keyword to filter by
        #[arg(short, long)]
        keyword: Option<String>,

        /// Open every node
        #[arg(long)]
        expand_all: bool,
    },

    /// Check or uncheck a node and print the new value list
    Toggle {
        #[command(flatten)]
        tree: TreeArgs,

        /// Ref key of the node (e.g. 0-0-1)
        #[arg(short, long)]
        node: String,

        /// Uncheck instead of check
        #[arg(long)]
        uncheck: bool,
    },

    /// Print the ref keys visible under a keyword
    Search {
        #[command(flatten)]
        tree: TreeArgs,

        /// Search keyword
        #[arg(short, long)]
        keyword: String,
    },
}
