//! Configuration module for checktree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CHECKTREE_*)
//! 3. Explicit `--config` file, else project config (.checktree.toml)
//! 4. User config (<config dir>/checktree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_layered, user_config_dir, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::CheckTreeConfig;
