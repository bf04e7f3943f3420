//! Error types for the confsweep CLI.
//!
//! Uses thiserror for derive macros. Only fatal conditions are modeled here:
//! a file that fails to parse is a normal per-file result, not an error.

use crate::exit_codes;
use thiserror::Error;

/// Fatal errors that abort a sweep.
///
/// Each variant maps to a specific exit code. Parse failures never appear
/// here; they are recorded per file and drive the exit code through the
/// sweep summary instead.
#[derive(Error, Debug)]
pub enum SweepError {
    /// The configuration could not be built (e.g. the default root path
    /// could not be resolved from the executable location).
    #[error("{0}")]
    Config(String),

    /// Directory traversal failed: unreadable directory or missing root.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Writing a report line to stdout or stderr failed.
    #[error("failed to write report output: {0}")]
    Report(#[from] std::io::Error),
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::Config(_) => exit_codes::CONFIG_FAILURE,
            SweepError::Walk(_) => exit_codes::RUN_FAILURE,
            SweepError::Report(_) => exit_codes::RUN_FAILURE,
        }
    }
}

/// Result type alias for confsweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
