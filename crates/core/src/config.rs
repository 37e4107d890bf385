//! Process configuration
//!
//! Settings are resolved once at the CLI boundary and passed down explicitly,
//! so nothing below this module reads the environment.

use crate::errors::ConfigError;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable naming the storage root
pub const ROOT_ENV: &str = "DOKKU_ROOT";

/// Environment variable holding the exit code for unknown commands
pub const NOT_IMPLEMENTED_EXIT_ENV: &str = "DOKKU_NOT_IMPLEMENTED_EXIT";

/// Exit code used when `DOKKU_NOT_IMPLEMENTED_EXIT` is unset or unparseable
pub const DEFAULT_NOT_IMPLEMENTED_EXIT: i32 = 10;

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Storage root, `None` when neither flag nor environment supplied one
    pub root: Option<PathBuf>,
    /// Exit status for unrecognised top-level commands
    pub not_implemented_exit: i32,
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// Precedence for the root: CLI flag > DOKKU_ROOT env var.
    pub fn from_env(cli_root: Option<PathBuf>) -> Self {
        Self::resolve(cli_root, |key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn resolve<F>(cli_root: Option<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = cli_root.or_else(|| {
            lookup(ROOT_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });

        let not_implemented_exit = match lookup(NOT_IMPLEMENTED_EXIT_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                debug!(
                    value = %raw,
                    "failed to parse {}, using {}",
                    NOT_IMPLEMENTED_EXIT_ENV,
                    DEFAULT_NOT_IMPLEMENTED_EXIT
                );
                DEFAULT_NOT_IMPLEMENTED_EXIT
            }),
            None => DEFAULT_NOT_IMPLEMENTED_EXIT,
        };

        Self {
            root,
            not_implemented_exit,
        }
    }

    /// The storage root, failing when none was configured.
    pub fn require_root(&self) -> Result<PathBuf, ConfigError> {
        self.root.clone().ok_or(ConfigError::MissingRoot)
    }
}
