//! Path utilities

use std::path::{Path, PathBuf};

use crate::error::{GitAliasError, Result};

/// Default git config location, before tilde expansion
pub const DEFAULT_GIT_CONFIG: &str = "~/.gitconfig";

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Resolve an `[include] path` value the way git does: `~` is expanded and
/// relative paths are taken from the including file's directory, not from
/// the current working directory as a plain `open(path)` would do.
pub fn resolve_include_path(base_dir: &Path, raw: &str) -> PathBuf {
    let expanded = expand_tilde(raw.trim().trim_matches('"'));
    if expanded.is_absolute() {
        expanded
    } else {
        base_dir.join(expanded)
    }
}

/// Read a config file, keeping the path in the error
pub fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| GitAliasError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })
}
