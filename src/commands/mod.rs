//! Subcommand implementations

pub mod inspect;
pub mod search;
pub mod toggle;

use anyhow::{Context as _, Result};
use serde_json::Value;

use checktree::config::{load_layered, CheckTreeConfig};
use checktree::infrastructure::{load_tree, load_values};
use checktree::presentation::cli::{Cli, TreeArgs};
use checktree::presentation::terminal::stdout_supports_unicode;
use checktree::presentation::Icons;
use checktree::{CheckTree, JsonAccessor};

/// Settings shared by every subcommand
pub struct Context {
    pub config: CheckTreeConfig,
    pub json: bool,
    pub icons: Icons,
}

impl Context {
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let (config, warnings) =
            load_layered(cli.config.as_deref(), Some(&cwd)).context("Failed to load config")?;
        for warning in &warnings {
            eprintln!("warning: {}", warning);
        }

        Ok(Self {
            config,
            json: cli.json,
            icons: Icons::new(!cli.ascii && stdout_supports_unicode()),
        })
    }

    /// Load the tree and selection named by `args` into a fresh engine
    pub fn build_tree(&self, args: &TreeArgs) -> Result<CheckTree<JsonAccessor>> {
        let data = load_tree(&args.data)
            .with_context(|| format!("Failed to load tree from {}", args.data.display()))?;
        let values = match &args.value {
            Some(path) => load_values(path)
                .with_context(|| format!("Failed to load values from {}", path.display()))?,
            None => Vec::new(),
        };

        let mut options = self.config.options().with_default_value(values);
        if args.no_cascade {
            options.cascade = false;
        }
        Ok(CheckTree::new(data, self.config.accessor(), options))
    }
}

/// Write one NDJSON line to stdout
pub fn emit(value: Value) {
    println!("{}", value);
}

/// Plain strings print bare, everything else as compact JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
