//! Error types and handling
//!
//! The error taxonomy is structured with specific error enums for each domain
//! (configuration, application registry, option store, reporting, command
//! validation) that are then wrapped in the main [`DockerOptionsError`] enum
//! for unified error handling at the command-dispatch boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No storage root was supplied by flag or environment
    #[error("Missing storage root: set DOKKU_ROOT or pass --root")]
    MissingRoot,
}

/// Application registry errors
#[derive(Error, Debug)]
pub enum AppError {
    /// No application name was given
    #[error("App name required")]
    MissingName,

    /// The name does not follow the application naming rules
    #[error("App name ({name}) must begin with lowercase alphanumeric character, and contain only lowercase alphanumeric characters, dots and dashes")]
    InvalidName { name: String },

    /// The application directory does not exist under the root
    #[error("App {name} does not exist")]
    NotFound { name: String },

    /// The root contains no applications
    #[error("You haven't deployed any applications yet")]
    NoneDeployed,

    /// The root directory could not be listed
    #[error("Failed to list applications in {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Option store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Blank or whitespace-only entries are never stored
    #[error("Docker option must not be blank")]
    BlankEntry,

    /// An entry must fit on a single line
    #[error("Docker option must not contain a newline: {entry:?}")]
    MultilineEntry { entry: String },

    /// Reading, creating or writing the phase file failed
    #[error("Failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reporting errors
#[derive(Error, Debug)]
pub enum ReportError {
    /// The requested flag is not one of the report flags
    #[error("Invalid flag passed, valid flags: {}", valid.join(" "))]
    InvalidFlag { flag: String, valid: Vec<String> },

    /// The flag is known but has no value for the application
    #[error("not deployed")]
    NotDeployed { app: String, flag: String },
}

/// Command argument validation errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// add/remove was called without any option arguments
    #[error("Please specify docker options to {action} the phase")]
    NoOptions { action: &'static str },

    /// Every requested phase was rejected by the phase filter
    #[error("No valid phases given: {requested}")]
    NoValidPhases { requested: String },
}

/// Main error enum wrapping all domain-specific errors
#[derive(Error, Debug)]
pub enum DockerOptionsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Application registry errors
    #[error(transparent)]
    App(#[from] AppError),

    /// Option store errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reporting errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Command argument validation errors
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Convenience type alias for Results with DockerOptionsError
pub type Result<T> = std::result::Result<T, DockerOptionsError>;
