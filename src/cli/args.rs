//! CLI argument definitions using Clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "git-alias")]
#[command(about = "Print the [alias] section of a git config as readable help")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// git config file (default: ~/.gitconfig)
    pub file: Option<PathBuf>,

    /// Include hidden aliases (`!: ignore`) and hidden commands
    #[arg(short, long)]
    pub all: bool,

    /// Print complex commands (-vv: pretty print)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print less information (up to -qqqq | -qqvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Settings file (default: <config dir>/git-alias/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Explicit `--color` / `--no-color`, if any
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        }
    }
}
