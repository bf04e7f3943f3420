//! Lexical path cleaning for confsweep.
//!
//! Root paths and user-supplied exclusion entries are normalized without
//! touching the filesystem: `.` components are dropped and `..` components
//! collapse their parent where one exists. Symlinks are not resolved;
//! matching works on the paths as the walk will print them.

use std::path::{Component, Path, PathBuf};

/// Clean a path lexically: collapse `.` and `..`, drop trailing separators.
///
/// Leading `..` components on relative paths are preserved (there is nothing
/// to pop), while a `..` directly under the root collapses into the root.
/// An input that cleans to nothing becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    // Normal components currently in `cleaned` that a `..` may pop.
    let mut poppable = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                cleaned.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if poppable > 0 {
                    cleaned.pop();
                    poppable -= 1;
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            Component::Normal(part) => {
                cleaned.push(part);
                poppable += 1;
            }
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(s: &str) -> String {
        clean_path(Path::new(s)).display().to_string()
    }

    #[test]
    fn test_clean_drops_cur_dir_components() {
        assert_eq!(clean("./a"), "a");
        assert_eq!(clean("a/./b"), "a/b");
        assert_eq!(clean("a/b/."), "a/b");
    }

    #[test]
    fn test_clean_collapses_parent_dirs() {
        assert_eq!(clean("a/../b"), "b");
        assert_eq!(clean("a/b/../../c"), "c");
        assert_eq!(clean("a/.."), ".");
    }

    #[test]
    fn test_clean_preserves_leading_parent_dirs() {
        assert_eq!(clean(".."), "..");
        assert_eq!(clean("../x"), "../x");
        assert_eq!(clean("../../a"), "../../a");
        assert_eq!(clean("a/../.."), "..");
    }

    #[test]
    fn test_clean_parent_of_root_is_root() {
        assert_eq!(clean("/.."), "/");
        assert_eq!(clean("/../a"), "/a");
        assert_eq!(clean("/a/../.."), "/");
    }

    #[test]
    fn test_clean_drops_trailing_separators() {
        assert_eq!(clean("a/"), "a");
        assert_eq!(clean("a//b/"), "a/b");
    }

    #[test]
    fn test_clean_empty_and_dot_become_dot() {
        assert_eq!(clean(""), ".");
        assert_eq!(clean("."), ".");
        assert_eq!(clean("./."), ".");
    }

    #[test]
    fn test_clean_keeps_absolute_paths_absolute() {
        assert_eq!(clean("/a/./b"), "/a/b");
        assert_eq!(clean("/"), "/");
    }
}
