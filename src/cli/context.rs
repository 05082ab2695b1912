//! Command execution context

use anyhow::Result;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::config::load_config;
use crate::model::{ColorChoice, Config, DisplayOptions};
use crate::utils::path::{expand_tilde, DEFAULT_GIT_CONFIG};

/// Everything resolved from flags and settings before walking
pub struct Context {
    pub config_file: PathBuf,
    pub options: DisplayOptions,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        let options = Self::resolve_options(cli, &config, || std::io::stdout().is_terminal());

        let config_file = cli.file.clone().unwrap_or_else(|| {
            expand_tilde(
                config
                    .display
                    .default_file
                    .as_deref()
                    .unwrap_or(DEFAULT_GIT_CONFIG),
            )
        });

        Ok(Self {
            config_file,
            options,
        })
    }

    /// Flags win over the settings file; `auto` color asks `is_tty`.
    pub fn resolve_options(
        cli: &Cli,
        config: &Config,
        is_tty: impl FnOnce() -> bool,
    ) -> DisplayOptions {
        let display = &config.display;
        let color = cli.color_override().unwrap_or_else(|| match display.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_tty(),
        });

        DisplayOptions {
            color,
            verbose: if cli.verbose > 0 { cli.verbose } else { display.verbose },
            quiet: if cli.quiet > 0 { cli.quiet } else { display.quiet },
            show_hidden: cli.all || display.show_hidden,
            inline_threshold: display.inline_threshold,
        }
    }
}
