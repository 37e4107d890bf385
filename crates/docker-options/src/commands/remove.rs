//! Remove command implementation
//!
//! Implements `docker-options:remove <app> <phase(s)> OPTION...`.

use crate::commands::shared::{option_entries, resolve_targets, CommandContext};
use anyhow::{Context, Result};
use docker_options_core::store;
use tracing::{info, instrument};

/// Remove command arguments
#[derive(Debug, Clone)]
pub struct RemoveArgs {
    /// Application name
    pub app: String,
    /// Comma separated phase list
    pub phases: String,
    /// Raw option arguments
    pub options: Vec<String>,
    /// Treat each argument as its own entry
    pub each: bool,
}

/// Remove the option entries from every requested phase of the app
#[instrument(skip_all, fields(app = %args.app))]
pub fn execute_remove(args: RemoveArgs, ctx: &CommandContext) -> Result<()> {
    let targets = resolve_targets(ctx, &args.app, &args.phases)?;
    let entries = option_entries(&args.options, args.each, "remove from")?;

    for target in &targets {
        for entry in &entries {
            store::remove(&target.path, entry).with_context(|| {
                format!(
                    "Failed to remove docker option from {} phase of {}",
                    target.phase, args.app
                )
            })?;
        }
        info!(phase = %target.phase, count = entries.len(), "Removed docker options");
    }
    Ok(())
}
