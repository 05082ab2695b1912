//! Core data models for git-alias

mod alias;
mod config;
mod options;

pub use alias::{Alias, AliasCommand, Hint};
pub use config::{ColorChoice, Config, DisplayConfig};
pub use options::{DisplayOptions, DEFAULT_INLINE_THRESHOLD};
