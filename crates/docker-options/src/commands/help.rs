//! Usage text for `docker-options`, `docker-options:help` and `help`.

use anyhow::Result;
use docker_options_core::io::Output;
use std::io::Write;

const USAGE_HEADER: &[&str] = &[
    "Usage: dokku docker-options[:COMMAND]",
    "",
    "Display app's Docker options for all phases.",
    "",
    "Additional commands:",
];

/// Command synopsis and description pairs, in display order
const COMMANDS: &[(&str, &str)] = &[
    (
        "docker-options:add <app> <phase(s)> OPTION",
        "Add Docker option to app for phase (comma separated phase list)",
    ),
    (
        "docker-options:remove <app> <phase(s)> OPTION",
        "Remove Docker option from app for phase (comma separated phase list)",
    ),
    (
        "docker-options:report [<app>] [<flag>]",
        "Displays a docker options report for one or more apps",
    ),
];

const PLUGIN_SUMMARY: &str = "    docker-options, Display app's Docker options for all phases.";

/// Align `rows` into two columns with a four space indent and two space gutter.
fn columnize(rows: &[(&str, &str)]) -> Vec<String> {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(left, right)| format!("    {:<width$}  {}", left, right, width = width))
        .collect()
}

/// Print the usage header and command table.
pub fn execute_usage<W: Write>(output: &mut Output<W>) -> Result<()> {
    for line in USAGE_HEADER {
        output.write_line(line)?;
    }
    for line in columnize(COMMANDS) {
        output.write_line(&line)?;
    }
    output.flush()
}

/// Print the one-line summary shown in the global help listing.
pub fn execute_plugin_help<W: Write>(output: &mut Output<W>) -> Result<()> {
    output.write_line("")?;
    output.write_line(PLUGIN_SUMMARY)?;
    output.flush()
}
