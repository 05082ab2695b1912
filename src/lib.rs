//! git-alias - Git Alias Help Printer
//!
//! Reads a git config file and prints its `[alias]` section as help text.
//!
//! # Features
//!
//! - Alias documentation from the comments above each alias
//! - `usage:`, `see:` and `!:` comment directives
//! - Pretty-printing of `!` shell aliases
//! - `[include]` files walked in place
//! - ANSI colors or plain ASCII markup

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod model;
pub mod parser;
pub mod utils;

pub use error::{GitAliasError, Result};
pub use formatter::{AliasFormatter, Format};
pub use model::{Alias, AliasCommand, Config, DisplayOptions};
pub use parser::{print_aliases, ConfigWalker};
