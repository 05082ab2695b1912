//! Alias data structures extracted from the `[alias]` section

/// A documentation line attached to an alias through its comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Plain documentation text
    Text(String),
    /// A reference rendered as `@: <url>`
    Link(String),
}

/// The command body of an alias plus its display preferences.
///
/// `show` and `inline` are tri-state: `None` means "decide from the
/// command itself", `Some(_)` is an explicit `!:` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCommand {
    pub raw: String,
    pub show: Option<bool>,
    pub inline: Option<bool>,
    pub prettify: bool,
}

impl AliasCommand {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            show: None,
            inline: None,
            prettify: false,
        }
    }

    /// A command is complex when it runs a shell program (`!cmd` or `"!cmd"`).
    pub fn is_complex(&self) -> bool {
        self.raw.trim_start_matches('"').starts_with('!')
    }

    /// Inline display unless overridden: short commands stay on the alias line.
    pub fn is_inline(&self, threshold: usize) -> bool {
        self.inline
            .unwrap_or_else(|| self.raw.chars().count() < threshold)
    }
}

/// A single alias ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub command: AliasCommand,
    pub usage: Option<String>,
    pub hints: Vec<Hint>,
    /// Set by `!: ignore`; hidden aliases are only rendered with `--all`
    pub hidden: bool,
}

impl Alias {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            command: AliasCommand::new(command.into().trim()),
            usage: None,
            hints: Vec::new(),
            hidden: false,
        }
    }

    pub fn add_description(&mut self, line: impl Into<String>) {
        self.hints.push(Hint::Text(line.into()));
    }

    pub fn add_link(&mut self, url: impl Into<String>) {
        self.hints.push(Hint::Link(url.into()));
    }

    pub fn has_hints(&self) -> bool {
        !self.hints.is_empty()
    }
}
