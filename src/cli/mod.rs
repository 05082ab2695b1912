//! CLI module

pub mod actions;
pub mod args;
pub mod context;

pub use args::Cli;
pub use context::Context;
