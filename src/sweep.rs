//! The recursive sweep: walk the tree, check candidates, report, aggregate.
//!
//! Traversal is depth-first with directory entries sorted by file name, so a
//! given tree always produces the same report order. Exclusion is decided
//! per entry: an excluded directory is skipped as a candidate but still
//! descended, and each of its descendants is matched against the exclusion
//! list on its own. Per-file problems (unreadable file, parse error) are
//! recorded and the walk continues; only traversal and report-stream errors
//! abort the sweep.

use crate::config::Config;
use crate::error::Result;
use crate::exit_codes;
use crate::report;
use crate::validate::{check_file, CheckKind, FileCheck};
use std::io::Write;
use walkdir::WalkDir;

/// Outcome of a completed sweep.
#[derive(Debug, Default)]
pub struct SweepSummary {
    checks: Vec<FileCheck>,
}

impl SweepSummary {
    fn record(&mut self, check: FileCheck) {
        self.checks.push(check);
    }

    /// Number of checks performed. A file matched by both suffix sets
    /// counts once per kind. Consulted by tests only; the run's outcome
    /// needs just the failure count.
    #[allow(dead_code)]
    pub fn total(&self) -> usize {
        self.checks.len()
    }

    /// Number of failed checks.
    pub fn failures(&self) -> usize {
        self.checks.iter().filter(|check| !check.passed()).count()
    }

    /// True when no check failed. An empty sweep passes.
    pub fn all_passed(&self) -> bool {
        self.failures() == 0
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            exit_codes::SUCCESS
        } else {
            exit_codes::VALIDATION_FAILURE
        }
    }
}

/// Walk `config.root` and validate every candidate file.
///
/// Each check writes one progress line to `out`; failed checks also write
/// one diagnostic line to `err`. Returns the aggregated summary, or an
/// error if the walk or a report sink fails.
pub fn run(config: &Config, out: &mut dyn Write, err: &mut dyn Write) -> Result<SweepSummary> {
    let mut summary = SweepSummary::default();

    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path().display().to_string();

        if config.is_excluded(&path) {
            continue;
        }

        for kind in [CheckKind::Yaml, CheckKind::Json] {
            if config.matches_suffix(kind, &path) {
                let check = check_file(kind, entry.path());
                report::write_check_line(out, &check)?;
                if !check.passed() {
                    report::write_diagnostic(err, &check)?;
                }
                summary.record(check);
            }
        }
    }

    Ok(summary)
}
