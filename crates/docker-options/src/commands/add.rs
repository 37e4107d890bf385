//! Add command implementation
//!
//! Implements `docker-options:add <app> <phase(s)> OPTION...`.

use crate::commands::shared::{option_entries, resolve_targets, CommandContext};
use anyhow::{Context, Result};
use docker_options_core::store;
use tracing::{info, instrument};

/// Add command arguments
#[derive(Debug, Clone)]
pub struct AddArgs {
    /// Application name
    pub app: String,
    /// Comma separated phase list
    pub phases: String,
    /// Raw option arguments
    pub options: Vec<String>,
    /// Store each argument as its own entry
    pub each: bool,
}

/// Append the option entries to every requested phase of the app
#[instrument(skip_all, fields(app = %args.app))]
pub fn execute_add(args: AddArgs, ctx: &CommandContext) -> Result<()> {
    let targets = resolve_targets(ctx, &args.app, &args.phases)?;
    let entries = option_entries(&args.options, args.each, "add to")?;

    for target in &targets {
        for entry in &entries {
            store::append(&target.path, entry).with_context(|| {
                format!(
                    "Failed to add docker option to {} phase of {}",
                    target.phase, args.app
                )
            })?;
        }
        info!(phase = %target.phase, count = entries.len(), "Added docker options");
    }
    Ok(())
}
