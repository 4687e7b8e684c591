//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ValueReportMode;
use crate::error::{CheckTreeError, CheckTreeResult};

use super::types::CheckTreeConfig;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = ".checktree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CheckTreeResult<(CheckTreeConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: CheckTreeConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CheckTreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration hierarchy.
///
/// An explicit file must load. Otherwise the project file, then the user
/// file, then defaults. Environment overrides apply last in every case.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> CheckTreeResult<(CheckTreeConfig, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    for candidate in candidate_paths(project_root) {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(CheckTreeConfig::default()), Vec::new()))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> CheckTreeConfig {
    for candidate in candidate_paths(project_root) {
        if !candidate.exists() {
            continue;
        }
        match CheckTreeConfig::load(&candidate) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => tracing::warn!(path = %candidate.display(), error = %e, "ignoring config"),
        }
    }

    with_env_overrides(CheckTreeConfig::default())
}

/// Apply environment variable overrides (CHECKTREE_* prefix)
pub fn with_env_overrides(config: CheckTreeConfig) -> CheckTreeConfig {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`
pub fn apply_overrides<F>(mut config: CheckTreeConfig, lookup: F) -> CheckTreeConfig
where
    F: Fn(&str) -> Option<String>,
{
    // CHECKTREE_CASCADE
    if let Some(raw) = lookup("CHECKTREE_CASCADE") {
        match parse_bool(&raw) {
            Some(cascade) => config.cascade = cascade,
            None => warn_invalid("CHECKTREE_CASCADE", &raw, BOOL_VALUES),
        }
    }

    // CHECKTREE_EXPAND_ALL (empty or "unset" hands control back to the nodes)
    if let Some(raw) = lookup("CHECKTREE_EXPAND_ALL") {
        let trimmed = raw.trim().to_lowercase();
        if trimmed.is_empty() || trimmed == "unset" {
            config.expand_all = None;
        } else {
            match parse_bool(&trimmed) {
                Some(expand) => config.expand_all = Some(expand),
                None => warn_invalid("CHECKTREE_EXPAND_ALL", &raw, BOOL_VALUES),
            }
        }
    }

    // CHECKTREE_REPORT_MODE
    if let Some(raw) = lookup("CHECKTREE_REPORT_MODE") {
        match raw.parse::<ValueReportMode>() {
            Ok(mode) => config.report_mode = mode,
            Err(_) => warn_invalid("CHECKTREE_REPORT_MODE", &raw, REPORT_MODE_VALUES),
        }
    }

    config
}

/// User config directory (`<config dir>/checktree`).
///
/// `CHECKTREE_CONFIG_HOME` overrides the platform directory.
pub fn user_config_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CHECKTREE_CONFIG_HOME") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("checktree"))
}

fn candidate_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = user_config_dir() {
        paths.push(dir.join("config.toml"));
    }
    paths
}

const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];
const REPORT_MODE_VALUES: &[&str] = &["only-parent", "all"];

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn warn_invalid(var: &str, value: &str, valid: &[&str]) {
    let suggestion = closest(&value.trim().to_lowercase(), valid);
    tracing::warn!(
        var,
        value,
        suggestion = suggestion.unwrap_or("-"),
        valid = %valid.join(", "),
        "ignoring invalid environment override"
    );
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cascade",
        "value_key",
        "label_key",
        "children_key",
        "uncheckable_item_values",
        "disabled_item_values",
        "expand_all",
        "default_expand_all",
        "search_keyword",
        "report_mode",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}

/// Closest candidate within two edits
fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(input, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
