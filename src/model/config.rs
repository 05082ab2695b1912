//! Settings file structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::options::DEFAULT_INLINE_THRESHOLD;

/// Main settings structure, read from `<config_dir>/git-alias/config.toml`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

/// When to emit ANSI colors
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Display defaults; command-line flags take precedence
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: ColorChoice,
    pub verbose: u8,
    pub quiet: u8,
    pub show_hidden: bool,
    pub inline_threshold: usize,
    /// Config file to read when none is given on the command line
    pub default_file: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: ColorChoice::Auto,
            verbose: 0,
            quiet: 0,
            show_hidden: false,
            inline_threshold: DEFAULT_INLINE_THRESHOLD,
            default_file: None,
        }
    }
}

impl Config {
    /// Get the git-alias configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("git-alias")
    }

    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
