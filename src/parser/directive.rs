//! # Comment Directives
//!
//! Comments directly above an alias document it. A comment of the form
//! `keyword: value` with a known keyword is a directive instead of text:
//!
//! | Keyword | Effect |
//! |---------|--------|
//! | `usage`, `use` | usage string (alias name stripped from the front) |
//! | `see`, `link`, `url`, `web` | `@: <url>` documentation line |
//! | `http`, `https` | same as `link`, scheme kept |
//! | `!` | comma-separated [`LintInstruction`]s |
//!
//! Comments starting with `!#` are dropped entirely.

use tracing::debug;

use super::patterns::{HIDE_RE, INLINE_RE, MULTILINE_RE, PRETTIFY_RE, SHOW_RE};
use crate::model::Alias;

/// One parsed alias comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Usage(String),
    Link(String),
    Lint(Vec<LintInstruction>),
    Text(String),
    Silenced,
}

/// Display instructions from a `!:` comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintInstruction {
    /// Hide the whole alias unless `--all`
    Ignore,
    ShowCommand,
    HideCommand,
    Inline,
    Multiline,
    Prettify,
}

impl LintInstruction {
    pub fn parse(instruction: &str) -> Option<Self> {
        let instruction = instruction.trim().to_lowercase();
        if instruction == "ignore" {
            Some(LintInstruction::Ignore)
        } else if SHOW_RE.is_match(&instruction) {
            Some(LintInstruction::ShowCommand)
        } else if HIDE_RE.is_match(&instruction) {
            Some(LintInstruction::HideCommand)
        } else if INLINE_RE.is_match(&instruction) {
            Some(LintInstruction::Inline)
        } else if MULTILINE_RE.is_match(&instruction) {
            Some(LintInstruction::Multiline)
        } else if PRETTIFY_RE.is_match(&instruction) {
            Some(LintInstruction::Prettify)
        } else {
            None
        }
    }

    /// Parse `a, b, c`; unknown instructions are skipped.
    pub fn parse_list(list: &str) -> Vec<Self> {
        list.split(',')
            .filter_map(|item| {
                let parsed = Self::parse(item);
                if parsed.is_none() && !item.trim().is_empty() {
                    debug!(instruction = item.trim(), "unknown lint instruction");
                }
                parsed
            })
            .collect()
    }

    pub fn apply(self, alias: &mut Alias) {
        match self {
            LintInstruction::Ignore => alias.hidden = true,
            LintInstruction::ShowCommand => alias.command.show = Some(true),
            LintInstruction::HideCommand => alias.command.show = Some(false),
            LintInstruction::Inline => alias.command.inline = Some(true),
            LintInstruction::Multiline => alias.command.inline = Some(false),
            LintInstruction::Prettify => alias.command.prettify = true,
        }
    }
}

impl Directive {
    /// Classify a comment body (already stripped of its `#`/`;` marker).
    pub fn parse(comment: &str) -> Self {
        if let Some((head, tail)) = comment.split_once(':') {
            let keyword = head.trim().to_lowercase();
            let tail = tail.trim();
            match keyword.as_str() {
                "http" | "https" => return Directive::Link(format!("{}:{}", keyword, tail)),
                "usage" | "use" => return Directive::Usage(tail.to_string()),
                "see" | "link" | "url" | "web" => return Directive::Link(tail.to_string()),
                "!" => return Directive::Lint(LintInstruction::parse_list(tail)),
                _ => {}
            }
        }

        if comment.starts_with("!#") {
            Directive::Silenced
        } else {
            Directive::Text(comment.to_string())
        }
    }
}

/// Build an alias from its definition and the comments above it.
///
/// Returns `None` when an `!: ignore` is reached and hidden aliases are not
/// requested; comments after that point are not processed.
pub fn parse_alias(
    name: &str,
    command: &str,
    comments: &[String],
    show_hidden: bool,
) -> Option<Alias> {
    let mut alias = Alias::new(name, command);

    for comment in comments {
        match Directive::parse(comment) {
            Directive::Usage(usage) => {
                let usage = strip_leading_name(&usage, &alias.name);
                alias.usage = (!usage.is_empty()).then(|| usage.to_string());
            }
            Directive::Link(url) => alias.add_link(url),
            Directive::Lint(instructions) => {
                for instruction in instructions {
                    instruction.apply(&mut alias);
                }
            }
            Directive::Text(text) => alias.add_description(text),
            Directive::Silenced => {}
        }

        if alias.hidden && !show_hidden {
            debug!(alias = %alias.name, "alias hidden by `!: ignore`");
            return None;
        }
    }

    Some(alias)
}

/// `git lg <n>` style usage lines repeat the alias name; drop it.
fn strip_leading_name<'a>(usage: &'a str, name: &str) -> &'a str {
    match usage.get(..name.len()) {
        Some(head) if !name.is_empty() && head.eq_ignore_ascii_case(name) => {
            let rest = &usage[name.len()..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                rest.trim_start()
            } else {
                usage
            }
        }
        _ => usage,
    }
}
