//! Per-invocation collaborators handed to every command.

use anyhow::Result;
use docker_options_core::apps::{AppRegistry, FsAppRegistry};
use docker_options_core::config::Settings;
use docker_options_core::errors::DockerOptionsError;
use docker_options_core::paths::PathResolver;
use docker_options_core::report::Reporter;
use std::path::Path;

/// Path resolver and application registry for one storage root
pub struct CommandContext {
    pub resolver: PathResolver,
    pub registry: Box<dyn AppRegistry>,
}

impl CommandContext {
    /// Context over `root` using the directory-backed registry.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            resolver: PathResolver::new(root.as_ref()),
            registry: Box::new(FsAppRegistry::new(root.as_ref())),
        }
    }

    /// Context from resolved settings; fails when no root is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let root = settings.require_root().map_err(DockerOptionsError::from)?;
        Ok(Self::new(root))
    }

    /// Reporter borrowing this context's resolver and registry
    pub fn reporter(&self) -> Reporter<'_> {
        Reporter::new(&self.resolver, self.registry.as_ref())
    }
}

#[cfg(test)]
impl CommandContext {
    /// Context with a caller-supplied registry.
    pub fn with_registry<P: AsRef<Path>>(root: P, registry: Box<dyn AppRegistry>) -> Self {
        Self {
            resolver: PathResolver::new(root),
            registry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_settings_requires_root() {
        let settings = Settings {
            root: None,
            not_implemented_exit: 10,
        };
        let err = CommandContext::from_settings(&settings).err().unwrap();
        assert!(err.to_string().contains("DOKKU_ROOT"));

        let settings = Settings {
            root: Some(PathBuf::from("/srv/apps")),
            not_implemented_exit: 10,
        };
        let ctx = CommandContext::from_settings(&settings).unwrap();
        assert_eq!(ctx.resolver.root(), Path::new("/srv/apps"));
    }
}
