//! # Command Reflower
//!
//! Re-flows a one-line shell alias (`!f() { ...; }; f`) into an indented
//! pseudo-multiline listing. This is cosmetic only: it never builds a syntax
//! tree and never fails on unbalanced input.
//!
//! ## Break Rules
//!
//! | Trigger | Effect |
//! |---------|--------|
//! | `{` (not `{}`) | break after, indent +1 |
//! | `}` (not `{}`) | indent -1, break before |
//! | `;` | break after |
//! | ` && `, ` \| ` | break after, continuation glyph on next line |
//!
//! `$` variables are highlighted as one token. Inside a `"!..."` command,
//! `\"` is unescaped and the closing `"` is dropped.

use crate::formatter::Format;

/// Special single-character shell parameters (`$?`, `$#`, ...)
const SPECIAL_PARAMS: &str = "0123456789!$?#*-@";

/// Single-pass, index-based reflow of a command body.
pub struct CommandReflower<'a> {
    format: &'a Format,
    result: String,
    depth: usize,
    newline: bool,
    continuation: bool,
    escape_quotes: bool,
}

impl<'a> CommandReflower<'a> {
    pub fn new(format: &'a Format) -> Self {
        Self {
            format,
            result: String::new(),
            depth: 0,
            newline: false,
            continuation: false,
            escape_quotes: false,
        }
    }

    /// Consume the reflower and return the re-flowed command.
    pub fn reflow(mut self, raw: &str) -> String {
        let text = self.strip_prefix(raw);
        let chars: Vec<char> = text.chars().collect();
        let mut skip = 0usize;

        for (i, &c) in chars.iter().enumerate() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();

            match c {
                '\\' if self.escape_quotes && next == Some('"') => {
                    self.emit("\"");
                    skip = 1;
                    continue;
                }
                '$' => {
                    if let Some(len) = variable_len(&chars[i + 1..]) {
                        let token: String = chars[i..=i + len].iter().collect();
                        let styled = self.format.variable(&token);
                        self.emit(&styled);
                        skip = len;
                        continue;
                    }
                }
                '"' if self.escape_quotes => {
                    // closing quote of a `"!..."` command
                    self.escape_quotes = false;
                    continue;
                }
                '}' if prev != Some('{') => {
                    self.depth = self.depth.saturating_sub(1);
                    self.newline = true;
                }
                _ => {}
            }

            self.append(c);

            match c {
                '{' if next != Some('}') => {
                    self.depth += 1;
                    self.newline = true;
                }
                ';' => self.newline = true,
                '&' | '|' if is_chain_operator(&chars, i) => {
                    self.continuation = true;
                    self.newline = true;
                }
                _ => {}
            }
        }

        self.result
    }

    /// Drop the leading `!` and an opening `"`; the quote turns on `\"` handling.
    fn strip_prefix<'t>(&mut self, raw: &'t str) -> &'t str {
        let mut text = raw;
        if let Some(rest) = text.strip_prefix('!') {
            text = rest.trim_start();
        }
        if let Some(rest) = text.strip_prefix('"') {
            text = rest.trim_start_matches(&['!', ' ', '\t'][..]);
            self.escape_quotes = true;
        }
        text
    }

    fn append(&mut self, c: char) {
        if self.newline && c.is_whitespace() {
            return;
        }
        self.flush_newline();
        self.result.push(c);
    }

    fn emit(&mut self, text: &str) {
        self.flush_newline();
        self.result.push_str(text);
    }

    fn flush_newline(&mut self) {
        if !self.newline {
            return;
        }
        self.newline = false;
        let indent = " ".repeat(4 * self.depth);
        self.result.push_str(&self.format.indent(&indent));
        if self.continuation {
            self.result.push_str(&self.format.continuation());
            self.continuation = false;
        }
    }
}

/// Re-flow `raw` with a fresh reflower.
pub fn reflow(format: &Format, raw: &str) -> String {
    CommandReflower::new(format).reflow(raw)
}

/// Length of the variable name following a `$`, if any.
///
/// `${...}` stops at the first `}` on the same line.
fn variable_len(rest: &[char]) -> Option<usize> {
    let first = *rest.first()?;
    if SPECIAL_PARAMS.contains(first) {
        return Some(1);
    }
    if first == '{' {
        return rest
            .iter()
            .take_while(|&&c| c != '\n')
            .position(|&c| c == '}')
            .map(|pos| pos + 1);
    }
    if first.is_ascii_alphabetic() || first == '_' {
        return Some(
            rest.iter()
                .take_while(|c| c.is_ascii_alphanumeric() || **c == '_')
                .count(),
        );
    }
    None
}

/// ` && ` (at the second `&`) or a lone ` | `; never `||`.
fn is_chain_operator(chars: &[char], i: usize) -> bool {
    let at = |j: usize| chars.get(j).copied();
    let next_is_space = at(i + 1) == Some(' ');
    match chars[i] {
        '&' => i >= 2 && at(i - 1) == Some('&') && at(i - 2) == Some(' ') && next_is_space,
        '|' => i >= 1 && at(i - 1) == Some(' ') && next_is_space,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(raw: &str) -> String {
        reflow(&Format::new(false), raw)
    }

    #[test]
    fn test_function_body_is_indented() {
        assert_eq!(
            plain("!f() { echo hi; }; f"),
            "f() {\n        echo hi;\n    };\n    f"
        );
    }

    #[test]
    fn test_nested_braces() {
        assert_eq!(
            plain("!f() { if x; then { a; }; fi; }; f"),
            "f() {\n        if x;\n        then {\n            a;\n        };\n        fi;\n    };\n    f"
        );
    }

    #[test]
    fn test_and_chain_gets_continuation_marker() {
        assert_eq!(
            plain("!git fetch && git rebase"),
            "git fetch &&\n    ↳  git rebase"
        );
    }

    #[test]
    fn test_pipe_gets_continuation_marker() {
        assert_eq!(plain("!git log | less"), "git log |\n    ↳  less");
    }

    #[test]
    fn test_logical_or_is_not_a_break() {
        assert_eq!(plain("!git pull || true"), "git pull || true");
        assert_eq!(plain("!a&&b"), "a&&b");
    }

    #[test]
    fn test_empty_braces_do_not_indent() {
        assert_eq!(plain("!f() {}; f"), "f() {};\n    f");
    }

    #[test]
    fn test_escaped_quotes_in_quoted_command() {
        assert_eq!(plain(r#""!echo \"hi\" there""#), r#"echo "hi" there"#);
    }

    #[test]
    fn test_escapes_untouched_without_leading_quote() {
        assert_eq!(plain(r#"!echo \"hi\""#), r#"echo \"hi\""#);
    }

    #[test]
    fn test_quoted_command_strips_bang_after_quote() {
        assert_eq!(plain("\"!  git status\""), "git status");
    }

    #[test]
    fn test_brace_variable_is_not_rescanned() {
        // the `;` inside `${...}` must not trigger a break
        assert_eq!(plain("!echo ${a;b} done"), "echo ${a;b} done");
    }

    #[test]
    fn test_variables_highlighted_as_single_tokens() {
        let fmt = Format::new(true);
        let out = reflow(&fmt, "!echo $foo_bar $1 ${HOME}/x $?");

        assert!(out.contains(&fmt.variable("$foo_bar")));
        assert!(out.contains(&fmt.variable("$1")));
        assert!(out.contains(&fmt.variable("${HOME}")));
        assert!(out.contains(&fmt.variable("$?")));
        assert!(!out.contains(&fmt.variable("$foo")));
    }

    #[test]
    fn test_variable_after_break_is_indented() {
        assert_eq!(plain("!cd x; $EDITOR ."), "cd x;\n    $EDITOR .");
    }

    #[test]
    fn test_unbalanced_input_does_not_panic() {
        let out = plain("!}}} { echo $ \\");
        assert!(out.contains("echo $ \\"));
        assert_eq!(plain("!{ { {"), plain("!{ { {"));
    }

    #[test]
    fn test_depth_never_negative() {
        assert_eq!(plain("!}; a"), "\n    };\n    a");
    }

    #[test]
    fn test_reflow_is_deterministic() {
        let raw = "\"!f() { git log --format=\\\"%h\\\" $1 | head; }; f\"";
        assert_eq!(plain(raw), plain(raw));
    }

    #[test]
    fn test_variable_len() {
        let chars: Vec<char> = "foo_bar1 rest".chars().collect();
        assert_eq!(variable_len(&chars), Some(8));
        let chars: Vec<char> = "{x}y".chars().collect();
        assert_eq!(variable_len(&chars), Some(3));
        let chars: Vec<char> = "{open".chars().collect();
        assert_eq!(variable_len(&chars), None);
        let chars: Vec<char> = " x".chars().collect();
        assert_eq!(variable_len(&chars), None);
    }
}
