//! Configuration model for confsweep.
//!
//! The `Config` value is built once at startup from the parsed CLI arguments
//! and passed by reference into the sweep; there are no ambient globals. It
//! carries the resolved root path plus the suffix sets and exclusion
//! substrings that drive matching.

use crate::cli::Cli;
use crate::error::{Result, SweepError};
use crate::paths::clean_path;
use crate::validate::CheckKind;
use std::env;
use std::path::{Path, PathBuf};

/// Suffixes classifying a path as a YAML candidate.
pub const DEFAULT_YAML_SUFFIXES: &[&str] = &[".yaml", ".yml"];

/// Suffixes classifying a path as a JSON candidate.
pub const DEFAULT_JSON_SUFFIXES: &[&str] = &[".json"];

/// Path substrings excluded from validation by default.
///
/// Matched verbatim anywhere in a visited path; the surrounding slashes keep
/// them anchored to whole directory names.
pub const DEFAULT_IGNORED_PATHS: &[&str] = &["/.git/", "/vendor/", "/.gopath~/", "/node_modules/"];

/// Runtime configuration for one sweep. Immutable after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cleaned root path the walk starts from.
    pub root: PathBuf,

    /// Suffixes triggering the YAML check (matched with `ends_with`).
    pub yaml_suffixes: Vec<String>,

    /// Suffixes triggering the JSON check (matched with `ends_with`).
    pub json_suffixes: Vec<String>,

    /// Literal substrings; any visited path containing one is skipped.
    pub ignored_paths: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            yaml_suffixes: to_strings(DEFAULT_YAML_SUFFIXES),
            json_suffixes: to_strings(DEFAULT_JSON_SUFFIXES),
            ignored_paths: to_strings(DEFAULT_IGNORED_PATHS),
        }
    }
}

impl Config {
    /// Build the runtime configuration from parsed CLI arguments.
    ///
    /// The root falls back to the parent of the executable's directory when
    /// no path argument was given; either way it is cleaned lexically.
    /// User-supplied exclusion entries are cleaned the same way and appended
    /// after the defaults; empty entries (e.g. from a trailing comma) are
    /// discarded.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.path {
            Some(path) => clean_path(path),
            None => default_root()?,
        };

        let mut ignored_paths = to_strings(DEFAULT_IGNORED_PATHS);
        for entry in &cli.ignore_directories {
            if entry.is_empty() {
                continue;
            }
            ignored_paths.push(clean_path(Path::new(entry)).display().to_string());
        }

        Ok(Self {
            root,
            ignored_paths,
            ..Self::default()
        })
    }

    /// True when `path` contains any configured exclusion substring.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.ignored_paths.iter().any(|d| path.contains(d.as_str()))
    }

    /// True when `path` ends with one of the suffixes configured for `kind`.
    ///
    /// Suffixes are matched on the path string, not on an extracted
    /// extension, so `archive.yaml.bak` never matches and a bare `.yaml`
    /// does. With the default sets a path matches at most one kind, but
    /// overlapping sets are legal and simply trigger both checks.
    pub fn matches_suffix(&self, kind: CheckKind, path: &str) -> bool {
        let suffixes = match kind {
            CheckKind::Yaml => &self.yaml_suffixes,
            CheckKind::Json => &self.json_suffixes,
        };
        suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Resolve the default root: the parent of the executable's directory.
///
/// When the binary sits at a conventional location inside a checkout
/// (e.g. `<repo>/bin/confsweep`), this makes the repository root the
/// default scan target.
fn default_root() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| {
        SweepError::Config(format!("failed to locate the running executable: {}", e))
    })?;

    let exe_dir = exe.parent().ok_or_else(|| {
        SweepError::Config(format!(
            "executable path '{}' has no parent directory",
            exe.display()
        ))
    })?;

    Ok(clean_path(&exe_dir.join("..")))
}
