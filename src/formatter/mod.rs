//! Formatter module: turns parsed aliases into report text

mod alias;
pub mod style;

pub use alias::AliasFormatter;
pub use style::{Format, Style};
