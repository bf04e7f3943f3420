//! Exit code constants for the confsweep CLI.
//!
//! - 0: Success (every check passed, or nothing matched)
//! - 1: Validation failure (at least one file failed to parse)
//! - 2: Configuration error (clap also exits 2 on usage errors)
//! - 3: Run failure (directory traversal or report stream error)

/// Successful run: every validation passed, or no candidate files existed.
pub const SUCCESS: i32 = 0;

/// One or more files failed validation during an otherwise complete run.
pub const VALIDATION_FAILURE: i32 = 1;

/// The configuration could not be built: unresolvable root path, or a usage
/// error rejected by the argument parser.
pub const CONFIG_FAILURE: i32 = 2;

/// The run aborted before completing the walk: unreadable directory,
/// nonexistent root, or a broken report stream.
pub const RUN_FAILURE: i32 = 3;
