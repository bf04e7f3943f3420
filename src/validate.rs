//! Per-file validation checks for confsweep.
//!
//! Each candidate file is read fully and handed to the relevant parser as a
//! yes/no oracle: serde_yaml for YAML candidates, serde_json for JSON. No
//! schema or semantic checking happens here: a file passes exactly when the
//! parser accepts its full content.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// The grammar a candidate file is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Yaml,
    Json,
}

impl CheckKind {
    /// Label used in report lines (`Validating YAML ...: OK`).
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Yaml => "YAML",
            CheckKind::Json => "JSON",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    /// Word printed at the end of a report line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "OK",
            CheckStatus::Fail => "ERROR",
        }
    }
}

/// Result of checking one path against one grammar.
///
/// A path with an ambiguous suffix can produce two of these (one per kind);
/// each contributes independently to the run's exit code.
#[derive(Debug, Clone)]
pub struct FileCheck {
    /// The path as visited by the walk (relative roots stay relative).
    pub path: String,

    /// Which grammar was checked.
    pub kind: CheckKind,

    /// Pass or fail.
    pub status: CheckStatus,

    /// Parser or read diagnostic; present exactly when the check failed.
    pub message: Option<String>,
}

impl FileCheck {
    pub fn pass(kind: CheckKind, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            status: CheckStatus::Pass,
            message: None,
        }
    }

    pub fn fail(kind: CheckKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            status: CheckStatus::Fail,
            message: Some(message.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Check one path against one grammar.
///
/// The file is read fully into memory before parsing. Read failures
/// (unreadable file, non-UTF-8 content, the path being a directory) count as
/// check failures, not fatal errors; only the walk itself aborts the run.
pub fn check_file(kind: CheckKind, path: &Path) -> FileCheck {
    let display = path.display().to_string();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return FileCheck::fail(kind, display, e.to_string()),
    };

    let outcome = match kind {
        CheckKind::Yaml => parse_yaml(&content),
        CheckKind::Json => parse_json(&content),
    };

    match outcome {
        Ok(()) => FileCheck::pass(kind, display),
        Err(message) => FileCheck::fail(kind, display, message),
    }
}

/// YAML oracle: every document in the stream must parse.
///
/// Accepts multi-document input (`---` separated). An empty file contains
/// zero documents and passes.
fn parse_yaml(content: &str) -> Result<(), String> {
    for document in serde_yaml::Deserializer::from_str(content) {
        serde_yaml::Value::deserialize(document).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// JSON oracle: the content must be exactly one JSON value.
fn parse_json(content: &str) -> Result<(), String> {
    serde_json::from_str::<serde_json::Value>(content)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_valid_yaml_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.yaml", "key: value\nlist:\n  - 1\n  - 2\n");

        let check = check_file(CheckKind::Yaml, &path);
        assert!(check.passed());
        assert!(check.message.is_none());
        assert_eq!(check.kind, CheckKind::Yaml);
    }

    #[test]
    fn test_invalid_yaml_fails_with_message() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.yaml", "key: [unclosed\n");

        let check = check_file(CheckKind::Yaml, &path);
        assert!(!check.passed());
        assert!(check.message.is_some());
    }

    #[test]
    fn test_empty_yaml_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.yaml", "");

        let check = check_file(CheckKind::Yaml, &path);
        assert!(check.passed());
    }

    #[test]
    fn test_multi_document_yaml_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "multi.yaml", "---\nname: one\n---\nname: two\n");

        let check = check_file(CheckKind::Yaml, &path);
        assert!(check.passed());
    }

    #[test]
    fn test_multi_document_yaml_with_broken_document_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "multi.yaml", "---\nname: one\n---\nname: [broken\n");

        let check = check_file(CheckKind::Yaml, &path);
        assert!(!check.passed());
    }

    #[test]
    fn test_valid_json_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.json", "{\"key\": [1, 2, 3]}\n");

        let check = check_file(CheckKind::Json, &path);
        assert!(check.passed());
    }

    #[test]
    fn test_invalid_json_fails_with_message() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "b.json", "{bad json");

        let check = check_file(CheckKind::Json, &path);
        assert!(!check.passed());
        assert!(check.message.is_some());
    }

    #[test]
    fn test_empty_json_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.json", "");

        let check = check_file(CheckKind::Json, &path);
        assert!(!check.passed());
    }

    #[test]
    fn test_json_with_trailing_garbage_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "trailing.json", "{\"ok\": true} extra");

        let check = check_file(CheckKind::Json, &path);
        assert!(!check.passed());
    }

    #[test]
    fn test_missing_file_is_a_check_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.yaml");

        let check = check_file(CheckKind::Yaml, &path);
        assert!(!check.passed());
        assert!(check.message.is_some());
    }

    #[test]
    fn test_directory_candidate_is_a_check_failure() {
        // A directory named like a candidate file cannot be read, which
        // counts as a failed check rather than a fatal run error.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dir.yaml");
        fs::create_dir(&path).unwrap();

        let check = check_file(CheckKind::Yaml, &path);
        assert!(!check.passed());
        assert!(check.message.is_some());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CheckKind::Yaml.label(), "YAML");
        assert_eq!(CheckKind::Json.label(), "JSON");
        assert_eq!(CheckKind::Yaml.to_string(), "YAML");
    }

    #[test]
    fn test_status_words() {
        assert_eq!(CheckStatus::Pass.as_str(), "OK");
        assert_eq!(CheckStatus::Fail.as_str(), "ERROR");
    }
}
