//! git-alias - Git alias help printer

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_alias::cli::{actions, Cli, Context};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    let mut stdout = std::io::stdout().lock();
    match actions::list::execute(&ctx, &mut stdout) {
        Ok(()) => Ok(()),
        // reader went away (`git-alias | head`)
        Err(e) if e.is_broken_pipe() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
