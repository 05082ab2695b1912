//! # Config Walker
//!
//! Scans a git config file line by line and prints help for its aliases.
//!
//! ## State Machine
//!
//! | Section | Meaningful lines |
//! |---------|------------------|
//! | `[alias]` | comments (collected), `##` titles, `name = command` |
//! | `[include]` | `path = <file>` (walked recursively) |
//! | anything else | section headers only |
//!
//! A command ending in `\` continues on the next physical line; the joined
//! lines keep their newlines. A continuation still open at end of file is
//! dropped.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::directive::parse_alias;
use super::patterns::{KEY_VALUE_RE, SECTION_RE};
use crate::error::Result;
use crate::formatter::AliasFormatter;
use crate::utils::path::{read_config, resolve_include_path};

/// Section currently being scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    None,
    Alias,
    Include,
    Other(String),
}

impl Section {
    pub fn from_header(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "alias" => Section::Alias,
            "include" => Section::Include,
            other => Section::Other(other.to_string()),
        }
    }
}

/// Per-file scan state. Includes get a fresh walker sharing the output.
pub struct ConfigWalker<'a, W: Write> {
    formatter: &'a AliasFormatter,
    out: &'a mut W,
    base_dir: PathBuf,
    section: Section,
    comments: Vec<String>,
    continuation: Option<String>,
    /// Something was printed by this walker; next title gets a blank line
    dirty: bool,
}

impl<'a, W: Write> ConfigWalker<'a, W> {
    /// `base_dir` anchors relative include paths.
    pub fn new(formatter: &'a AliasFormatter, out: &'a mut W, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            formatter,
            out,
            base_dir: base_dir.into(),
            section: Section::None,
            comments: Vec::new(),
            continuation: None,
            dirty: false,
        }
    }

    /// Read and walk a config file.
    pub fn walk_file(formatter: &'a AliasFormatter, out: &'a mut W, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "walking config file");
        let content = read_config(path)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        ConfigWalker::new(formatter, out, base_dir).walk(&content)
    }

    pub fn walk(mut self, content: &str) -> Result<()> {
        for line in content.lines() {
            self.process_line(line)?;
        }
        if let Some(partial) = self.continuation.take() {
            debug!(command = %partial, "dropping unterminated continuation at end of file");
        }
        Ok(())
    }

    fn process_line(&mut self, raw: &str) -> Result<()> {
        if self.section == Section::Alias {
            if let Some(mut pending) = self.continuation.take() {
                let line = raw.trim_end();
                pending.push('\n');
                match line.strip_suffix('\\') {
                    Some(head) => {
                        pending.push_str(head);
                        self.continuation = Some(pending);
                    }
                    None => {
                        pending.push_str(line);
                        self.emit_alias(&pending)?;
                    }
                }
                return Ok(());
            }
        }

        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }

        if let Some(caps) = SECTION_RE.captures(line) {
            return self.enter_section(&caps[1]);
        }

        match self.section {
            Section::Include => self.include(line),
            Section::Alias => {
                if self.take_comment(line)? {
                    return Ok(());
                }
                match line.strip_suffix('\\') {
                    Some(head) => {
                        self.continuation = Some(head.to_string());
                        Ok(())
                    }
                    None => self.emit_alias(line),
                }
            }
            Section::None | Section::Other(_) => Ok(()),
        }
    }

    fn enter_section(&mut self, header: &str) -> Result<()> {
        self.section = Section::from_header(header);
        trace!(section = ?self.section, "entering section");
        if self.section == Section::Alias {
            self.print_section(&header.trim().to_lowercase())?;
        }
        Ok(())
    }

    fn print_section(&mut self, title: &str) -> Result<()> {
        if self.formatter.options().show_sections() {
            let title = title.trim_matches(&[';', '#', ' ', '\t'][..]);
            writeln!(self.out, "{}", self.formatter.section(title, self.dirty))?;
            self.dirty = true;
        }
        Ok(())
    }

    /// Collect an alias comment. `##`-style lines are section titles.
    fn take_comment(&mut self, line: &str) -> Result<bool> {
        if !line.starts_with(is_comment_marker) {
            return Ok(false);
        }

        let second = line.chars().filter(|c| *c != ' ').nth(1);
        if second.is_some_and(is_comment_marker) {
            self.print_section(line)?;
        } else {
            self.comments.push(line[1..].trim_start().to_string());
        }
        Ok(true)
    }

    fn emit_alias(&mut self, line: &str) -> Result<()> {
        let Some(caps) = KEY_VALUE_RE.captures(line) else {
            debug!(line, "skipping alias line without '='");
            return Ok(());
        };

        let comments = std::mem::take(&mut self.comments);
        let show_hidden = self.formatter.options().show_hidden;
        if let Some(alias) = parse_alias(&caps[1], &caps[2], &comments, show_hidden) {
            writeln!(self.out, "{}", self.formatter.format_alias(&alias))?;
        }
        self.dirty = true;
        Ok(())
    }

    fn include(&mut self, line: &str) -> Result<()> {
        let Some(caps) = KEY_VALUE_RE.captures(line) else {
            return Ok(());
        };
        if !caps[1].trim().eq_ignore_ascii_case("path") {
            return Ok(());
        }

        let raw_path = caps[2].trim();
        let path = resolve_include_path(&self.base_dir, raw_path);
        debug!(include = raw_path, resolved = %path.display(), "following include");

        let show_markers = self.formatter.options().show_sections();
        if show_markers {
            writeln!(self.out, "{}", self.formatter.include_begin(raw_path))?;
        }
        ConfigWalker::walk_file(self.formatter, &mut *self.out, &path)?;
        if show_markers {
            writeln!(self.out, "{}", self.formatter.include_end(raw_path))?;
        }
        Ok(())
    }
}

fn is_comment_marker(c: char) -> bool {
    c == ';' || c == '#'
}

/// Walk `path` and write the report to `out`.
pub fn print_aliases<W: Write>(formatter: &AliasFormatter, out: &mut W, path: &Path) -> Result<()> {
    ConfigWalker::walk_file(formatter, out, path)
}
