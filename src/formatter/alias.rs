//! Presentation of aliases, section titles and include markers

use super::style::{Format, Style, NEWLINE};
use crate::model::{Alias, AliasCommand, DisplayOptions, Hint};
use crate::parser::reflow::reflow;

/// Renders report lines according to the resolved [`DisplayOptions`].
#[derive(Debug, Clone)]
pub struct AliasFormatter {
    format: Format,
    options: DisplayOptions,
}

impl AliasFormatter {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            format: Format::new(options.color),
            options,
        }
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn section(&self, title: &str, newline: bool) -> String {
        self.format.section(title, newline)
    }

    pub fn include_begin(&self, path: &str) -> String {
        format!("{}@include: {}", NEWLINE, path)
    }

    pub fn include_end(&self, path: &str) -> String {
        format!("@end: {}{}", path, NEWLINE)
    }

    /// Full entry for one alias: name, usage, command and documentation.
    pub fn format_alias(&self, alias: &Alias) -> String {
        let opts = &self.options;
        let mut out = self.format.alias(&alias.name, opts.quiet >= 2);

        if let Some(usage) = alias.usage.as_deref().filter(|_| opts.show_usage()) {
            out.push(' ');
            out.push_str(&self.format.usage(usage));
        }

        if self.should_print_command(alias) {
            out.push_str(&self.format_command(&alias.command));
        }

        if opts.show_hints() {
            for hint in &alias.hints {
                let line = match hint {
                    Hint::Text(text) => text.clone(),
                    Hint::Link(url) => self.format.link(url),
                };
                out.push_str(&self.format.indent(&line));
            }
        }

        if opts.spaced() {
            out.push_str(NEWLINE);
        }
        out
    }

    /// A documented multi-line command is assumed too long to be useful,
    /// so it is only shown on request (`!: show` or `-v`).
    pub fn should_print_command(&self, alias: &Alias) -> bool {
        let opts = &self.options;
        let command = &alias.command;

        if (command.show == Some(false) && !opts.show_hidden) || opts.quiet >= 3 {
            return false;
        }
        if !command.is_inline(opts.inline_threshold)
            && alias.has_hints()
            && command.show != Some(true)
            && opts.verbose == 0
        {
            return false;
        }
        true
    }

    pub fn format_command(&self, command: &AliasCommand) -> String {
        let opts = &self.options;
        let inline = !opts.pretty_print() && command.is_inline(opts.inline_threshold);

        let text = if command.is_complex() && (command.prettify || opts.pretty_print()) {
            reflow(&self.format, &command.raw)
        } else if opts.verbose == 1 && !inline {
            self.format.fx(Style::Dimmed, &command.raw)
        } else {
            command.raw.clone()
        };

        self.format.command(&text, inline)
    }
}
