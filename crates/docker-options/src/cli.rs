use crate::commands::shared::CommandContext;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use docker_options_core::config::Settings;
use docker_options_core::io::Output;
use std::path::PathBuf;

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON structured format
    Json,
}

/// Log format options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    Text,
    /// JSON structured format
    Json,
}

/// Log level options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Informational messages and above
    Info,
    /// Debug messages and above
    Debug,
    /// All messages including trace
    Trace,
}

/// Signals that the process should exit with the given status and no message.
///
/// Returned for top-level commands this plugin does not implement.
#[derive(Debug)]
pub struct NotImplementedExit(pub i32);

impl std::fmt::Display for NotImplementedExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Command not implemented (exit code {})", self.0)
    }
}

impl std::error::Error for NotImplementedExit {}

/// docker-options commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Display an app's docker options for all or the given phases (deprecated)
    #[command(name = "docker-options")]
    Display {
        /// Application name; without it the usage text is printed
        app: Option<String>,
        /// Comma separated phase list (build,deploy,run)
        phases: Option<String>,
    },
    /// Print usage
    #[command(name = "docker-options:help")]
    Help,
    /// Add docker option to app for phase (comma separated phase list)
    #[command(name = "docker-options:add", disable_help_flag = true)]
    Add {
        /// Store every option argument as its own entry instead of one combined entry
        #[arg(long)]
        each: bool,
        /// Application name
        app: String,
        /// Comma separated phase list (build,deploy,run)
        phases: String,
        /// Docker option(s) to add, passed through verbatim (`-h` is docker's hostname flag)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        options: Vec<String>,
    },
    /// Remove docker option from app for phase (comma separated phase list)
    #[command(name = "docker-options:remove", disable_help_flag = true)]
    Remove {
        /// Treat every option argument as its own entry instead of one combined entry
        #[arg(long)]
        each: bool,
        /// Application name
        app: String,
        /// Comma separated phase list (build,deploy,run)
        phases: String,
        /// Docker option(s) to remove
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        options: Vec<String>,
    },
    /// Displays a docker options report for one or more apps
    #[command(name = "docker-options:report")]
    Report {
        /// Output format (must precede the positional arguments)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// [<app>] [<flag>]; a leading flag reports on every app
        #[arg(num_args = 0..=2, allow_hyphen_values = true, value_name = "APP|FLAG")]
        args: Vec<String>,
    },
    /// One-line summary for the global help listing
    #[command(name = "help", hide = true)]
    PluginHelp,
    /// Any other command
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "Manage docker options per app and phase",
    disable_help_subcommand = true,
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    /// Log format (text or json, defaults to text, can be set via DOCKER_OPTIONS_LOG_FORMAT env var)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Storage root (defaults to DOKKU_ROOT)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Initializes logging, resolves settings and runs the selected command.
    ///
    /// Unknown top-level commands come back as a [`NotImplementedExit`] error
    /// carrying the configured exit status.
    pub fn dispatch(self) -> Result<()> {
        let log_format = match self.log_format {
            Some(LogFormat::Text) => Some("text"),
            Some(LogFormat::Json) => Some("json"),
            None => None,
        };
        let log_level = match self.log_level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        if std::env::var_os(docker_options_core::logging::LOG_ENV).is_none()
            && std::env::var_os("RUST_LOG").is_none()
        {
            std::env::set_var(
                "RUST_LOG",
                format!(
                    "docker_options={},docker_options_core={}",
                    log_level, log_level
                ),
            );
        }
        docker_options_core::logging::init(log_format)?;
        tracing::debug!("CLI initialized with log level: {}", log_level);

        let settings = Settings::from_env(self.root);
        let mut output = Output::stdout();

        match self.command {
            None | Some(Commands::Help) | Some(Commands::Display { app: None, .. }) => {
                crate::commands::help::execute_usage(&mut output)
            }
            Some(Commands::PluginHelp) => crate::commands::help::execute_plugin_help(&mut output),
            Some(Commands::Display {
                app: Some(app),
                phases,
            }) => {
                use crate::commands::display::{execute_display, DisplayArgs};
                let ctx = CommandContext::from_settings(&settings)?;
                execute_display(DisplayArgs { app, phases }, &ctx, &mut output)
            }
            Some(Commands::Add {
                each,
                app,
                phases,
                options,
            }) => {
                use crate::commands::add::{execute_add, AddArgs};
                let ctx = CommandContext::from_settings(&settings)?;
                execute_add(
                    AddArgs {
                        app,
                        phases,
                        options,
                        each,
                    },
                    &ctx,
                )
            }
            Some(Commands::Remove {
                each,
                app,
                phases,
                options,
            }) => {
                use crate::commands::remove::{execute_remove, RemoveArgs};
                let ctx = CommandContext::from_settings(&settings)?;
                execute_remove(
                    RemoveArgs {
                        app,
                        phases,
                        options,
                        each,
                    },
                    &ctx,
                )
            }
            Some(Commands::Report { format, args }) => {
                use crate::commands::report::{execute_report, ReportArgs};
                let ctx = CommandContext::from_settings(&settings)?;
                execute_report(ReportArgs::from_positionals(args, format), &ctx, &mut output)
            }
            Some(Commands::External(args)) => {
                tracing::debug!(command = ?args.first(), "Command not implemented");
                Err(NotImplementedExit(settings.not_implemented_exit).into())
            }
        }
    }
}
