//! # Parser Module
//!
//! Extracts aliases from git config files.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs        - This file: exports
//! ├── patterns.rs   - Regex patterns (SECTION_RE, KEY_VALUE_RE, lint words)
//! ├── directive.rs  - Comment directives (`usage:`, `see:`, `!:`)
//! ├── reflow.rs     - CommandReflower (cosmetic shell re-flow)
//! └── walker.rs     - ConfigWalker (sections, comments, continuations, includes)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use git_alias::formatter::AliasFormatter;
//! use git_alias::model::DisplayOptions;
//! use git_alias::parser::print_aliases;
//!
//! let formatter = AliasFormatter::new(DisplayOptions::default());
//! let mut stdout = std::io::stdout().lock();
//! print_aliases(&formatter, &mut stdout, "/home/me/.gitconfig".as_ref())?;
//! ```

pub mod directive;
pub mod patterns;
pub mod reflow;
pub mod walker;

pub use directive::{parse_alias, Directive, LintInstruction};
pub use reflow::{reflow, CommandReflower};
pub use walker::{print_aliases, ConfigWalker, Section};
