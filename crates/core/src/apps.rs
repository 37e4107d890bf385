//! Application registry
//!
//! Docker options never create or delete applications; they only need to know
//! whether a name refers to one and which ones exist. [`AppRegistry`] is that
//! seam. [`FsAppRegistry`] answers from the directory layout under the storage
//! root, where every application owns a directory named after it.

use crate::errors::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories under the root that are never applications
const RESERVED_DIRS: &[&str] = &["tls"];

/// Lookup of deployed applications
pub trait AppRegistry {
    /// Fail unless `app` names an existing application.
    fn verify_app_name(&self, app: &str) -> Result<(), AppError>;

    /// All application names, sorted.
    fn list_apps(&self) -> Result<Vec<String>, AppError>;
}

static APP_NAME: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9][a-z0-9.-]*$").expect("app name pattern is valid")
});

/// Check an application name against the naming rules without touching disk.
pub fn validate_app_name(app: &str) -> Result<(), AppError> {
    if app.is_empty() {
        return Err(AppError::MissingName);
    }
    if !APP_NAME.is_match(app) {
        return Err(AppError::InvalidName {
            name: app.to_string(),
        });
    }
    Ok(())
}

/// Registry backed by application directories under the storage root
#[derive(Debug, Clone)]
pub struct FsAppRegistry {
    root: PathBuf,
}

impl FsAppRegistry {
    /// Create a registry over `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl AppRegistry for FsAppRegistry {
    fn verify_app_name(&self, app: &str) -> Result<(), AppError> {
        validate_app_name(app)?;
        if !self.root.join(app).is_dir() {
            return Err(AppError::NotFound {
                name: app.to_string(),
            });
        }
        Ok(())
    }

    fn list_apps(&self) -> Result<Vec<String>, AppError> {
        let entries = fs::read_dir(&self.root).map_err(|source| AppError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut apps = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| AppError::Io {
                path: self.root.clone(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.starts_with('.') || RESERVED_DIRS.contains(&name.as_str()) {
                continue;
            }
            apps.push(name);
        }

        if apps.is_empty() {
            return Err(AppError::NoneDeployed);
        }
        apps.sort();
        debug!(count = apps.len(), root = %self.root.display(), "Listed applications");
        Ok(apps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_app_name() {
        assert!(validate_app_name("node-js-app").is_ok());
        assert!(validate_app_name("app.example").is_ok());
        assert!(validate_app_name("2048").is_ok());
        assert!(matches!(validate_app_name(""), Err(AppError::MissingName)));
        assert!(matches!(
            validate_app_name("Upper"),
            Err(AppError::InvalidName { .. })
        ));
        assert!(matches!(
            validate_app_name("-leading"),
            Err(AppError::InvalidName { .. })
        ));
        assert!(matches!(
            validate_app_name("../escape"),
            Err(AppError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_verify_existing_and_missing_app() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("web")).unwrap();
        let registry = FsAppRegistry::new(temp_dir.path());

        assert!(registry.verify_app_name("web").is_ok());
        assert!(matches!(
            registry.verify_app_name("worker"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_apps_skips_hidden_reserved_and_files() {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["web", "api", ".ssh", "tls"] {
            fs::create_dir(temp_dir.path().join(dir)).unwrap();
        }
        fs::write(temp_dir.path().join("HOSTNAME"), "example.com").unwrap();

        let registry = FsAppRegistry::new(temp_dir.path());
        assert_eq!(registry.list_apps().unwrap(), vec!["api", "web"]);
    }

    #[test]
    fn test_list_apps_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let registry = FsAppRegistry::new(temp_dir.path());
        assert!(matches!(registry.list_apps(), Err(AppError::NoneDeployed)));
    }
}
