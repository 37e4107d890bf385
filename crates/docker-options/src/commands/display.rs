//! Deprecated display command
//!
//! `docker-options <app> [<phase(s)>]` lists the stored entries of each
//! phase. Superseded by `docker-options:report` and kept for old scripts.

use crate::commands::shared::CommandContext;
use anyhow::Result;
use docker_options_core::errors::DockerOptionsError;
use docker_options_core::io::Output;
use docker_options_core::phase::{parse_phase_list, Phase};
use docker_options_core::store;
use std::io::Write;
use tracing::{instrument, warn};

/// Display command arguments
#[derive(Debug, Clone)]
pub struct DisplayArgs {
    /// Application name
    pub app: String,
    /// Optional comma separated phase list
    pub phases: Option<String>,
}

/// Print the entries of every phase, or only of the requested phases.
///
/// Without a phase list (or when none of the requested names are valid) all
/// phases with a store file are shown. Explicitly requested phases without a
/// file print `<Phase> options: none`.
#[instrument(skip_all, fields(app = %args.app))]
pub fn execute_display<W: Write>(
    args: DisplayArgs,
    ctx: &CommandContext,
    output: &mut Output<W>,
) -> Result<()> {
    warn!("Deprecated: Please use docker-options:report");

    let requested = args
        .phases
        .as_deref()
        .map(parse_phase_list)
        .unwrap_or_default();
    let show_all = requested.is_empty();
    let phases: Vec<Phase> = if show_all {
        Phase::all().to_vec()
    } else {
        requested
    };

    for phase in phases {
        let path = ctx
            .resolver
            .resolve_checked(ctx.registry.as_ref(), &args.app, phase)
            .map_err(DockerOptionsError::from)?;

        if !path.exists() {
            if !show_all {
                output.write_line(&format!("{} options: none", phase.title()))?;
            }
            continue;
        }

        output.write_line(&format!("{} options:", phase.title()))?;
        for entry in store::read_all(&path).map_err(DockerOptionsError::from)? {
            output.write_line(&format!("    {}", entry))?;
        }
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn display(ctx: &CommandContext, app: &str, phases: Option<&str>) -> Result<String> {
        let mut output = Output::new(Vec::new());
        execute_display(
            DisplayArgs {
                app: app.to_string(),
                phases: phases.map(str::to_string),
            },
            ctx,
            &mut output,
        )?;
        Ok(String::from_utf8(output.into_inner()).unwrap())
    }

    fn setup() -> (TempDir, CommandContext) {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("web")).unwrap();
        let ctx = CommandContext::new(temp_dir.path());
        store::append(&ctx.resolver.resolve("web", Phase::Build), "--squash").unwrap();
        store::append(&ctx.resolver.resolve("web", Phase::Build), "--pull").unwrap();
        store::append(&ctx.resolver.resolve("web", Phase::Run), "--rm").unwrap();
        (temp_dir, ctx)
    }

    #[test]
    fn test_display_all_skips_missing_phases() {
        let (_temp_dir, ctx) = setup();
        let text = display(&ctx, "web", None).unwrap();
        assert_eq!(
            text,
            "Build options:\n    --squash\n    --pull\nRun options:\n    --rm\n"
        );
    }

    #[test]
    fn test_display_requested_phases() {
        let (_temp_dir, ctx) = setup();
        let text = display(&ctx, "web", Some("deploy,run")).unwrap();
        assert_eq!(text, "Deploy options: none\nRun options:\n    --rm\n");
    }

    #[test]
    fn test_display_invalid_phases_fall_back_to_all() {
        let (_temp_dir, ctx) = setup();
        let all = display(&ctx, "web", None).unwrap();
        assert_eq!(display(&ctx, "web", Some("nope")).unwrap(), all);
    }

    #[test]
    fn test_display_unknown_app() {
        let (_temp_dir, ctx) = setup();
        let err = display(&ctx, "ghost", None).unwrap_err();
        assert_eq!(err.to_string(), "App ghost does not exist");
    }
}
