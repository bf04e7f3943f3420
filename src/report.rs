//! Report line formatting.
//!
//! Every check emits exactly one progress line on the primary sink, and a
//! failing check additionally emits one diagnostic line on the secondary
//! sink. Sinks are `&mut dyn Write` so tests can capture output in memory
//! while `main` passes the real stdout and stderr handles. Each line is
//! flushed as soon as it is written so progress streams even when output
//! is piped.

use crate::validate::FileCheck;
use std::io::{self, Write};

/// Write the per-check progress line: `Validating <KIND> <path>: <OK|ERROR>`.
pub fn write_check_line(out: &mut dyn Write, check: &FileCheck) -> io::Result<()> {
    writeln!(
        out,
        "Validating {} {}: {}",
        check.kind,
        check.path,
        check.status.as_str()
    )?;
    out.flush()
}

/// Write the failure diagnostic: `<KIND> validation of <path> failed: <message>`.
///
/// Call only for failed checks; a passing check has no message.
pub fn write_diagnostic(err: &mut dyn Write, check: &FileCheck) -> io::Result<()> {
    writeln!(
        err,
        "{} validation of {} failed: {}",
        check.kind,
        check.path,
        check.message.as_deref().unwrap_or("unknown error")
    )?;
    err.flush()
}
