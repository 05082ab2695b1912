//! Settings file loading

use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

use crate::model::Config;

/// Load settings from `path`, or from the default location.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let default_path = Config::config_path();
    let (path, explicit) = match path {
        Some(p) => (p, true),
        None => (default_path.as_path(), false),
    };

    if !explicit && !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read settings file '{}'", path.display()))?;
    Config::from_toml(&content)
        .with_context(|| format!("invalid settings file '{}'", path.display()))
}
