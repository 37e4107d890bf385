use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

fn main() -> Result<()> {
    let parsed = cli::Cli::parse();

    match parsed.dispatch() {
        Ok(()) => Ok(()),
        Err(err) => {
            // Unimplemented commands exit quietly so the plugin host can try the next plugin
            if let Some(exit) = err.downcast_ref::<cli::NotImplementedExit>() {
                std::process::exit(exit.0);
            }
            Err(err)
        }
    }
}
