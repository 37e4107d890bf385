//! Report command implementation
//!
//! Implements `docker-options:report [<app>] [<flag>]` in text and JSON form.

use crate::cli::OutputFormat;
use crate::commands::shared::CommandContext;
use anyhow::Result;
use docker_options_core::errors::DockerOptionsError;
use docker_options_core::io::Output;
use docker_options_core::report::{flag_label, ReportItem};
use std::io::Write;
use tracing::instrument;

/// Report command arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArgs {
    /// Application to report on; every application when `None`
    pub app: Option<String>,
    /// Report flag selecting a single value
    pub flag: Option<String>,
    /// Output format
    pub format: OutputFormat,
}

impl ReportArgs {
    /// Interpret `[<app>] [<flag>]` positionals.
    ///
    /// A first positional starting with `--` is the flag, and the report then
    /// covers every application.
    pub fn from_positionals(args: Vec<String>, format: OutputFormat) -> Self {
        let mut args = args.into_iter();
        let first = args.next();
        match first {
            Some(flag) if flag.starts_with("--") => Self {
                app: None,
                flag: Some(flag),
                format,
            },
            app => Self {
                app,
                flag: args.next(),
                format,
            },
        }
    }
}

/// Run the report and write it to `output`.
#[instrument(skip_all, fields(app = ?args.app, flag = ?args.flag))]
pub fn execute_report<W: Write>(
    args: ReportArgs,
    ctx: &CommandContext,
    output: &mut Output<W>,
) -> Result<()> {
    let items = ctx
        .reporter()
        .report_all(args.app.as_deref(), args.flag.as_deref())
        .map_err(DockerOptionsError::from)?;

    for item in &items {
        match args.format {
            OutputFormat::Text => write_text(item, output)?,
            OutputFormat::Json => write_json(item, output)?,
        }
    }
    output.flush()
}

fn write_text<W: Write>(item: &ReportItem, output: &mut Output<W>) -> Result<()> {
    match item {
        ReportItem::Full(report) => {
            output.header(&format!("{} docker options information", report.app))?;
            for (flag, value) in &report.flags {
                let line = format!("{:<30} {}", flag_label(flag), value);
                output.verbose(line.trim_end())?;
            }
            Ok(())
        }
        ReportItem::Flag { value, .. } => output.write_line(value),
    }
}

fn write_json<W: Write>(item: &ReportItem, output: &mut Output<W>) -> Result<()> {
    match item {
        ReportItem::Full(report) => output.write_json(report),
        ReportItem::Flag { value, .. } => output.write_json(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docker_options_core::store;
    use docker_options_core::Phase;
    use std::fs;
    use tempfile::TempDir;

    fn setup(apps: &[&str]) -> (TempDir, CommandContext) {
        let temp_dir = TempDir::new().unwrap();
        for app in apps {
            fs::create_dir(temp_dir.path().join(app)).unwrap();
        }
        let ctx = CommandContext::new(temp_dir.path());
        (temp_dir, ctx)
    }

    fn report(ctx: &CommandContext, args: &[&str], format: OutputFormat) -> Result<String> {
        let mut output = Output::new(Vec::new());
        let args = ReportArgs::from_positionals(args.iter().map(|a| a.to_string()).collect(), format);
        execute_report(args, ctx, &mut output)?;
        Ok(String::from_utf8(output.into_inner()).unwrap())
    }

    #[test]
    fn test_from_positionals() {
        let args = ReportArgs::from_positionals(vec![], OutputFormat::Text);
        assert_eq!(args.app, None);
        assert_eq!(args.flag, None);

        let args = ReportArgs::from_positionals(
            vec!["--docker-options-run".to_string()],
            OutputFormat::Text,
        );
        assert_eq!(args.app, None);
        assert_eq!(args.flag.as_deref(), Some("--docker-options-run"));

        let args = ReportArgs::from_positionals(
            vec!["web".to_string(), "--docker-options-build".to_string()],
            OutputFormat::Json,
        );
        assert_eq!(args.app.as_deref(), Some("web"));
        assert_eq!(args.flag.as_deref(), Some("--docker-options-build"));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_text_report_lists_every_phase() {
        let (_temp_dir, ctx) = setup(&["web"]);
        store::append(&ctx.resolver.resolve("web", Phase::Deploy), "--restart=always").unwrap();

        let text = report(&ctx, &["web"], OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "=====> web docker options information\n\
             \x20      Docker options build:\n\
             \x20      Docker options deploy:         --restart=always\n\
             \x20      Docker options run:\n"
        );
    }

    #[test]
    fn test_report_all_apps() {
        let (_temp_dir, ctx) = setup(&["web", "api"]);
        let text = report(&ctx, &[], OutputFormat::Text).unwrap();
        let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("=====>")).collect();
        assert_eq!(
            headers,
            vec![
                "=====> api docker options information",
                "=====> web docker options information"
            ]
        );
    }

    #[test]
    fn test_flag_report_prints_raw_value() {
        let (_temp_dir, ctx) = setup(&["web"]);
        let path = ctx.resolver.resolve("web", Phase::Build);
        store::append(&path, "--squash").unwrap();
        store::append(&path, "--pull").unwrap();

        let text = report(&ctx, &["web", "--docker-options-build"], OutputFormat::Text).unwrap();
        assert_eq!(text, "--squash--pull\n");

        let json = report(&ctx, &["web", "--docker-options-build"], OutputFormat::Json).unwrap();
        assert_eq!(json, "\"--squash--pull\"\n");
    }

    #[test]
    fn test_show_all_sentinel() {
        let (_temp_dir, ctx) = setup(&["web"]);
        let full = report(&ctx, &["web"], OutputFormat::Text).unwrap();
        assert_eq!(report(&ctx, &["web", "true"], OutputFormat::Text).unwrap(), full);
    }

    #[test]
    fn test_json_report() {
        let (_temp_dir, ctx) = setup(&["web"]);
        store::append(&ctx.resolver.resolve("web", Phase::Run), "--rm").unwrap();

        let json = report(&ctx, &["web"], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(json.trim()).unwrap();
        assert_eq!(value["app"], "web");
        assert_eq!(value["flags"]["--docker-options-run"], "--rm");
        assert_eq!(value["flags"]["--docker-options-build"], "");
    }

    #[test]
    fn test_report_errors() {
        let (_temp_dir, ctx) = setup(&["web"]);

        let err = report(&ctx, &["web", "--docker-options-run"], OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "not deployed");

        let err = report(&ctx, &["web", "--bogus"], OutputFormat::Text).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid flag passed, valid flags: --docker-options-build"));

        let err = report(&ctx, &["ghost"], OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "App ghost does not exist");
    }
}
