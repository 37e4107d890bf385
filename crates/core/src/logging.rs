//! Logging and observability
//!
//! Structured logging through `tracing`, text or JSON, selected at runtime via
//! CLI flags or environment variables. All logging output is directed to
//! stderr to preserve stdout for command output.

use anyhow::Result;
use std::{io, sync::Once};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive variable, checked before `RUST_LOG`
pub const LOG_ENV: &str = "DOCKER_OPTIONS_LOG";

/// Format variable used when no format is passed explicitly
pub const LOG_FORMAT_ENV: &str = "DOCKER_OPTIONS_LOG_FORMAT";

static INIT: Once = Once::new();

/// Initialize the logging system
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// * `format` - `Some("json")` for JSON lines, anything else for text. `None`
///   defers to `DOCKER_OPTIONS_LOG_FORMAT`.
///
/// The filter comes from `DOCKER_OPTIONS_LOG`, then `RUST_LOG`, then `info`.
pub fn init(format: Option<&str>) -> Result<()> {
    INIT.call_once(|| {
        let filter = create_env_filter();

        let env_format = std::env::var(LOG_FORMAT_ENV).ok();
        let effective_format = format.or(env_format.as_deref()).unwrap_or("text");

        match effective_format {
            "json" => {
                tracing_subscriber::registry()
                    .with(
                        fmt::layer()
                            .json()
                            .with_target(true)
                            .with_writer(io::stderr),
                    )
                    .with(filter)
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(
                        fmt::layer()
                            .with_target(false)
                            .without_time()
                            .with_writer(io::stderr),
                    )
                    .with(filter)
                    .init();
            }
        }

        tracing::debug!("Logging initialized with format: {}", effective_format);
    });

    Ok(())
}

fn create_env_filter() -> EnvFilter {
    if let Ok(spec) = std::env::var(LOG_ENV) {
        EnvFilter::try_new(&spec).unwrap_or_else(|_| {
            tracing::warn!("Invalid {} specification '{}', using 'info'", LOG_ENV, spec);
            EnvFilter::new("info")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Whether a subscriber has been installed by [`init`]
pub fn is_initialized() -> bool {
    INIT.is_completed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_multiple_calls_safe() {
        assert!(init(None).is_ok());
        assert!(init(Some("json")).is_ok());
        assert!(init(Some("text")).is_ok());
        assert!(is_initialized());
    }

    #[test]
    #[serial]
    fn test_env_filter_with_env_vars() {
        std::env::set_var(LOG_ENV, "debug");
        let _filter = create_env_filter();
        std::env::set_var(LOG_ENV, "not a [valid] filter @@");
        let _filter = create_env_filter();
        std::env::remove_var(LOG_ENV);
    }
}
