//! Confsweep: recursive well-formedness checker for YAML and JSON trees.
//!
//! This is the main entry point for the `confsweep` CLI. It parses
//! arguments, sweeps the requested tree, and maps the outcome to a process
//! exit code: 0 when every checked file parses, 1 when any check fails.

mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod paths;
pub mod report;
pub mod sweep;
pub mod validate;

use cli::Cli;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(summary) => ExitCode::from(summary.exit_code() as u8),
        Err(err) => {
            // Per-file diagnostics were already reported; this is for
            // failures that abort the sweep itself.
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> error::Result<sweep::SweepSummary> {
    let config = config::Config::from_cli(cli)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    sweep::run(&config, &mut stdout.lock(), &mut stderr.lock())
}
