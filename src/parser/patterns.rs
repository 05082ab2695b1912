//! # Git Config Regex Patterns
//!
//! All regex patterns used to scan git-config lines and `!:` directives.
//!
//! ## Adding New Patterns
//!
//! 1. Add pattern to `lazy_static!` block below
//! 2. Use it from `walker.rs` or `directive.rs`

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // =========================================================================
    // Config Line Patterns
    // =========================================================================

    /// Matches a section header: `[alias]`, `[include]`, `[core]`
    ///
    /// Captures:
    /// - Group 1: section name (untrimmed, original case)
    pub static ref SECTION_RE: Regex = Regex::new(
        r"^\[(.+)\]$"
    ).unwrap();

    /// Matches `key = value`, where the value may span joined continuation lines.
    ///
    /// Captures:
    /// - Group 1: key (shortest run before the first `=`)
    /// - Group 2: value (everything after `=` and surrounding blanks)
    pub static ref KEY_VALUE_RE: Regex = Regex::new(
        r"^(.+?)\s*=\s*([\s\S]+)$"
    ).unwrap();

    // =========================================================================
    // `!:` Lint Instruction Patterns (input is lower-cased and trimmed)
    // =========================================================================

    /// `show`, `show command`, `show cmd`
    pub static ref SHOW_RE: Regex = Regex::new(
        r"^show( command| cmd)?$"
    ).unwrap();

    /// Anything starting with `hide`, or `no command` / `not cmd`
    pub static ref HIDE_RE: Regex = Regex::new(
        r"^(hide|(no|not) (command|cmd)$)"
    ).unwrap();

    /// `inline`, `in line`, `singleline`, `single line`
    pub static ref INLINE_RE: Regex = Regex::new(
        r"^(single ?|in ?)line$"
    ).unwrap();

    /// `newline`, `multiline`, `not inline`, `no single line`, ...
    pub static ref MULTILINE_RE: Regex = Regex::new(
        r"^(new ?|multi ?|not? (single ?|in ?))line$"
    ).unwrap();

    /// `pretty`, `prettify` and anything they prefix
    pub static ref PRETTIFY_RE: Regex = Regex::new(
        r"^prett(if)?y"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_re() {
        let caps = SECTION_RE.captures("[alias]").unwrap();
        assert_eq!(&caps[1], "alias");

        let caps = SECTION_RE.captures("[ Include ]").unwrap();
        assert_eq!(&caps[1], " Include ");

        assert!(SECTION_RE.captures("[]").is_none());
        assert!(SECTION_RE.captures("st = status").is_none());
    }

    #[test]
    fn test_key_value_re() {
        let caps = KEY_VALUE_RE.captures("st = status").unwrap();
        assert_eq!(&caps[1], "st");
        assert_eq!(&caps[2], "status");

        let caps = KEY_VALUE_RE.captures("lg=log --format=%h").unwrap();
        assert_eq!(&caps[1], "lg");
        assert_eq!(&caps[2], "log --format=%h");

        assert!(KEY_VALUE_RE.captures("bare-key").is_none());
    }

    #[test]
    fn test_key_value_re_multiline_value() {
        let caps = KEY_VALUE_RE.captures("f = !echo a \n  echo b").unwrap();
        assert_eq!(&caps[1], "f");
        assert_eq!(&caps[2], "!echo a \n  echo b");
    }

    #[test]
    fn test_show_hide_patterns() {
        assert!(SHOW_RE.is_match("show"));
        assert!(SHOW_RE.is_match("show cmd"));
        assert!(!SHOW_RE.is_match("shower"));

        assert!(HIDE_RE.is_match("hide"));
        assert!(HIDE_RE.is_match("hide command"));
        assert!(HIDE_RE.is_match("not cmd"));
        assert!(HIDE_RE.is_match("no command"));
        assert!(!HIDE_RE.is_match("not command please"));
    }

    #[test]
    fn test_inline_patterns() {
        for s in ["inline", "in line", "singleline", "single line"] {
            assert!(INLINE_RE.is_match(s), "{}", s);
            assert!(!MULTILINE_RE.is_match(s), "{}", s);
        }
        for s in ["newline", "new line", "multiline", "not inline", "no singleline"] {
            assert!(MULTILINE_RE.is_match(s), "{}", s);
            assert!(!INLINE_RE.is_match(s), "{}", s);
        }
    }

    #[test]
    fn test_prettify_re() {
        assert!(PRETTIFY_RE.is_match("pretty"));
        assert!(PRETTIFY_RE.is_match("prettify"));
        assert!(PRETTIFY_RE.is_match("pretty print"));
        assert!(!PRETTIFY_RE.is_match("pret"));
    }
}
