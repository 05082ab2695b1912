//! Error types for git-alias
//!
//! The walker only fails on I/O: a config or include file that cannot be
//! read, or a report that cannot be written. Everything else in a config
//! file is best-effort and never surfaces as an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitAliasError {
    /// A config file (top-level or `[include]` target) could not be read.
    #[error("cannot read config file '{}': {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the rendered report failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl GitAliasError {
    /// True when the output stream was closed by the reader (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, GitAliasError::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, GitAliasError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_config_message_includes_path() {
        let err = GitAliasError::ReadConfig {
            path: PathBuf::from("/nope/.gitconfig"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/.gitconfig"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_broken_pipe_detection() {
        let err = GitAliasError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.is_broken_pipe());

        let err = GitAliasError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        assert!(!err.is_broken_pipe());
    }
}
