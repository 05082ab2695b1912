//! Styling primitives: ANSI colors or an ASCII fallback
//!
//! Every piece of styled text goes through [`Format::fx`] so the whole report
//! switches between colored and plain output with a single flag. The SGR
//! sequences are built here rather than by `colored`'s painter, whose
//! terminal detection would otherwise override that flag.

use colored::Color;

/// Line separator used in the rendered report
pub const NEWLINE: &str = "\n";

/// Base indentation for command bodies and documentation lines
pub const INDENT: &str = "    ";

const BOLD: &str = "1";
const FAINT: &str = "2";
const UNDERLINE: &str = "4";
const RESET: &str = "\x1b[0m";

/// Glyph marking a line that continues a `&&` / `|` chain
pub const CONTINUATION_GLYPH: &str = "↳  ";

/// Visual roles in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Section,
    AliasName,
    Usage,
    Link,
    Variable,
    Continuation,
    /// Complex command printed without reflow
    Dimmed,
}

impl Style {
    fn spec(self) -> (Color, &'static [&'static str]) {
        match self {
            Style::Section => (Color::Blue, &[BOLD, UNDERLINE]),
            Style::AliasName => (Color::Red, &[BOLD]),
            Style::Usage => (Color::Red, &[]),
            Style::Link | Style::Continuation => (Color::Black, &[FAINT]),
            Style::Variable => (Color::Yellow, &[BOLD]),
            Style::Dimmed => (Color::Red, &[FAINT]),
        }
    }

    /// Opening SGR sequence, e.g. `\x1b[1;31m`
    fn sgr(self) -> String {
        let (color, attrs) = self.spec();
        let mut params: Vec<String> = attrs.iter().map(|a| a.to_string()).collect();
        params.push(color.to_fg_str().to_string());
        format!("\x1b[{}m", params.join(";"))
    }

    /// Wrap `text`, re-opening this style after any inner reset so nested
    /// styled fragments do not end the outer style early.
    fn paint(self, text: &str) -> String {
        let left = self.sgr();
        let body = text.replace(RESET, &format!("{}{}", RESET, left));
        format!("{}{}{}", left, body, RESET)
    }
}

/// Stateless text styler, fixed to color or plain mode at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    color: bool,
}

impl Format {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Style `text`, or return it untouched in plain mode.
    pub fn fx(&self, style: Style, text: &str) -> String {
        self.fx_or(style, text, str::to_string)
    }

    /// Style `text`, or render it through `alt` in plain mode.
    pub fn fx_or(&self, style: Style, text: &str, alt: impl FnOnce(&str) -> String) -> String {
        if self.color {
            style.paint(text)
        } else {
            alt(text)
        }
    }

    /// Section title, preceded by a blank line when output already exists.
    pub fn section(&self, title: &str, newline: bool) -> String {
        let head = self.fx_or(Style::Section, title, |t| format!("=== {} ===", t));
        if newline {
            format!("{}{}", NEWLINE, head)
        } else {
            head
        }
    }

    /// Alias name; `bare` drops the leading space and ASCII marker.
    pub fn alias(&self, name: &str, bare: bool) -> String {
        if bare {
            return self.fx(Style::AliasName, name);
        }
        format!(
            " {}",
            self.fx_or(Style::AliasName, name, |t| format!("+ {}", t))
        )
    }

    pub fn usage(&self, text: &str) -> String {
        self.fx(Style::Usage, text)
    }

    /// Command body, either on the alias line or on its own indented line.
    pub fn command(&self, text: &str, inline: bool) -> String {
        if inline {
            format!("  →  {}", text)
        } else {
            format!("{}{}", self.indent(""), text)
        }
    }

    pub fn link(&self, url: &str) -> String {
        format!("@: {}", self.fx(Style::Link, url))
    }

    pub fn indent(&self, text: &str) -> String {
        format!("{}{}{}", NEWLINE, INDENT, text)
    }

    pub fn variable(&self, text: &str) -> String {
        self.fx(Style::Variable, text)
    }

    pub fn continuation(&self) -> String {
        self.fx(Style::Continuation, CONTINUATION_GLYPH)
    }
}
