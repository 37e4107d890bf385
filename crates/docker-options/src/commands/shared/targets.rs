//! Argument validation shared by add and remove.
//!
//! Everything here runs before the first write, so a rejected invocation never
//! leaves a partially updated set of phase files behind.

use super::CommandContext;
use anyhow::Result;
use docker_options_core::errors::{CommandError, DockerOptionsError};
use docker_options_core::phase::{parse_phase_list, Phase};
use docker_options_core::store;
use std::path::PathBuf;

/// A phase file a mutation will touch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub phase: Phase,
    pub path: PathBuf,
}

/// Validate `app` and the comma separated `phases`, then resolve their files.
///
/// Invalid phase names are dropped with a warning; if none survive, the
/// command fails.
pub fn resolve_targets(ctx: &CommandContext, app: &str, phases: &str) -> Result<Vec<Target>> {
    ctx.registry
        .verify_app_name(app)
        .map_err(DockerOptionsError::from)?;

    let valid = parse_phase_list(phases);
    if valid.is_empty() {
        return Err(DockerOptionsError::from(CommandError::NoValidPhases {
            requested: phases.to_string(),
        })
        .into());
    }

    Ok(valid
        .into_iter()
        .map(|phase| Target {
            phase,
            path: ctx.resolver.resolve(app, phase),
        })
        .collect())
}

/// Turn option arguments into the entries to store or remove.
///
/// By default all arguments are joined with single spaces into one combined
/// entry, so `remove` must be given the same arguments as the matching `add`.
/// With `each`, every argument is its own entry.
pub fn option_entries(options: &[String], each: bool, action: &'static str) -> Result<Vec<String>> {
    if options.is_empty() {
        return Err(DockerOptionsError::from(CommandError::NoOptions { action }).into());
    }
    let entries = if each {
        options.to_vec()
    } else {
        vec![options.join(" ")]
    };
    for entry in &entries {
        store::validate_entry(entry).map_err(DockerOptionsError::from)?;
    }
    Ok(entries)
}
