//! Storage path resolution
//!
//! Every (application, phase) pair owns one file:
//! `{root}/{app}/DOCKER_OPTIONS_{phase}`.

use crate::apps::AppRegistry;
use crate::errors::AppError;
use crate::phase::Phase;
use std::path::{Path, PathBuf};

/// File name prefix for phase option files
pub const PHASE_FILE_PREFIX: &str = "DOCKER_OPTIONS_";

/// Maps (app, phase) to the file holding its options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The storage root this resolver was built with
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the option file for `app` and `phase`. Pure; touches nothing.
    pub fn resolve(&self, app: &str, phase: Phase) -> PathBuf {
        self.root
            .join(app)
            .join(format!("{}{}", PHASE_FILE_PREFIX, phase.as_str()))
    }

    /// Like [`resolve`](Self::resolve), but only for applications the registry knows.
    pub fn resolve_checked(
        &self,
        registry: &dyn AppRegistry,
        app: &str,
        phase: Phase,
    ) -> Result<PathBuf, AppError> {
        registry.verify_app_name(app)?;
        Ok(self.resolve(app, phase))
    }
}
