//! Resolved display options shared by the walker and the formatter

/// Commands shorter than this many characters are displayed inline.
pub const DEFAULT_INLINE_THRESHOLD: usize = 42;

/// Display settings resolved once at startup from flags and the settings file.
///
/// Read-only for the remainder of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Emit ANSI styling instead of the ASCII fallback markup
    pub color: bool,
    /// `-v` count: 1 prints complex commands, 2+ pretty-prints them
    pub verbose: u8,
    /// `-q` count: each level drops one kind of output (up to 4)
    pub quiet: u8,
    /// `--all`: include aliases marked with `!: ignore`
    pub show_hidden: bool,
    pub inline_threshold: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color: false,
            verbose: 0,
            quiet: 0,
            show_hidden: false,
            inline_threshold: DEFAULT_INLINE_THRESHOLD,
        }
    }
}

impl DisplayOptions {
    /// Section titles and include markers are printed up to `-q`.
    pub fn show_sections(&self) -> bool {
        self.quiet <= 1
    }

    pub fn show_usage(&self) -> bool {
        self.quiet <= 3
    }

    pub fn show_hints(&self) -> bool {
        self.quiet == 0
    }

    /// Blank line after every alias in verbose mode.
    pub fn spaced(&self) -> bool {
        self.verbose >= 1 && self.quiet <= 2
    }

    pub fn pretty_print(&self) -> bool {
        self.verbose >= 2
    }
}
