//! Core library for docker-options
//!
//! Per-application, per-phase lists of docker command-line options: the phase
//! registry, storage path resolution, the file-backed option store, reporting,
//! plus the configuration, error and logging plumbing the CLI builds on.

pub mod apps;
pub mod config;
pub mod errors;
pub mod io;
pub mod logging;
pub mod paths;
pub mod phase;
pub mod report;
pub mod store;

pub use phase::Phase;

/// Get the version of the core library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let version = version();
        assert!(!version.is_empty());
        assert!(version.contains('.'));
    }
}
