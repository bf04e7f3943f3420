//! CLI argument parsing for confsweep.
//!
//! Uses clap derive macros. The tool has a single operation, sweeping a
//! tree, so there are no subcommands; the arguments feed straight into
//! `config::Config`.

use clap::Parser;
use std::path::PathBuf;

/// Confsweep: recursive well-formedness checker for YAML and JSON trees.
///
/// Walks the given directory, checks every file whose name ends in a YAML or
/// JSON suffix, prints one `Validating <KIND> <path>: <OK|ERROR>` line per
/// check, and exits 1 if any check failed.
#[derive(Parser, Debug)]
#[command(name = "confsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory (or single file) to scan.
    ///
    /// Defaults to the parent of the directory containing this executable.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Ignore additional directories' contents during validation.
    ///
    /// Comma-separated path substrings, merged with the built-in exclusions
    /// (/.git/, /vendor/, /.gopath~/, /node_modules/). May be repeated.
    #[arg(long, value_name = "DIR[,...]", value_delimiter = ',')]
    pub ignore_directories: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
