//! Lexical path splitting without filesystem access.

use std::path::{Component, Path, PathBuf};

/// Every prefix of `path` that names a directory to materialize, root first.
///
/// Built from `components()`, so a trailing `.` names the same directory as
/// its parent (`a/b/.` yields `a`, `a/b`). The root, a Windows prefix and a
/// leading `.` are never yielded on their own: they always exist. `..`
/// components are kept as-is; `a/../b` yields `a`, `a/..`, `a/../b`.
pub fn ancestors_root_first(path: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut prefix = PathBuf::new();
    for component in path.components() {
        prefix.push(component.as_os_str());
        match component {
            Component::Normal(_) | Component::ParentDir => out.push(prefix.clone()),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    out
}

/// Directory part of a file path, or `None` when the file sits in the cwd.
pub fn file_parent(path: &Path) -> Option<&Path> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Some(parent),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestors_absolute() {
        assert_eq!(
            ancestors_root_first(Path::new("/a/b/c")),
            vec![
                PathBuf::from("/a"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a/b/c")
            ]
        );
    }

    #[test]
    fn test_ancestors_relative() {
        assert_eq!(
            ancestors_root_first(Path::new("x/y")),
            vec![PathBuf::from("x"), PathBuf::from("x/y")]
        );
    }

    #[test]
    fn test_ancestors_root_only() {
        assert!(ancestors_root_first(Path::new("/")).is_empty());
    }

    #[test]
    fn test_ancestors_skip_leading_curdir() {
        assert_eq!(
            ancestors_root_first(Path::new("./p")),
            vec![PathBuf::from("./p")]
        );
    }

    #[test]
    fn test_ancestors_trailing_curdir() {
        assert_eq!(
            ancestors_root_first(Path::new("a/b/.")),
            vec![PathBuf::from("a"), PathBuf::from("a/b")]
        );
    }

    #[test]
    fn test_ancestors_keep_parent_dir() {
        assert_eq!(
            ancestors_root_first(Path::new("a/../b")),
            vec![
                PathBuf::from("a"),
                PathBuf::from("a/.."),
                PathBuf::from("a/../b")
            ]
        );
    }

    #[test]
    fn test_file_parent_nested() {
        assert_eq!(
            file_parent(Path::new("/tmp/a/b/c.txt")),
            Some(Path::new("/tmp/a/b"))
        );
    }

    #[test]
    fn test_file_parent_bare_name() {
        assert_eq!(file_parent(Path::new("c.txt")), None);
    }

    #[test]
    fn test_file_parent_root_file() {
        assert_eq!(file_parent(Path::new("/c.txt")), Some(Path::new("/")));
    }
}
