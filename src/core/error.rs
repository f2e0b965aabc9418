//! Why a directory could not be materialized.

use crate::util::fs::{classify, OsFailure};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid path {}: {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("filesystem limit exceeded at {}", .path.display())]
    LimitExceeded {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no space left to create {}", .path.display())]
    NoSpace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("symbolic link not allowed: {}", .path.display())]
    SymlinkRejected { path: PathBuf },

    #[error("parent of {} kept disappearing", .path.display())]
    ParentMissing { path: PathBuf },

    #[error("create {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MaterializeError {
    /// The component the walk stopped at.
    pub fn path(&self) -> &Path {
        match self {
            MaterializeError::NotADirectory { path }
            | MaterializeError::PermissionDenied { path, .. }
            | MaterializeError::InvalidPath { path, .. }
            | MaterializeError::LimitExceeded { path, .. }
            | MaterializeError::NoSpace { path, .. }
            | MaterializeError::SymlinkRejected { path }
            | MaterializeError::ParentMissing { path }
            | MaterializeError::Io { path, .. } => path,
        }
    }

    /// Short stable name, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            MaterializeError::NotADirectory { .. } => "not_a_directory",
            MaterializeError::PermissionDenied { .. } => "permission_denied",
            MaterializeError::InvalidPath { .. } => "invalid_path",
            MaterializeError::LimitExceeded { .. } => "limit_exceeded",
            MaterializeError::NoSpace { .. } => "no_space",
            MaterializeError::SymlinkRejected { .. } => "symlink_rejected",
            MaterializeError::ParentMissing { .. } => "parent_missing",
            MaterializeError::Io { .. } => "io",
        }
    }

    /// Map a fatal OS error at `path`.
    ///
    /// `AlreadyExists` is not fatal and callers handle it before getting
    /// here; it lands in `Io` if it slips through.
    pub(crate) fn from_os(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match classify(&source) {
            OsFailure::NotADirectory => MaterializeError::NotADirectory { path },
            OsFailure::PermissionDenied => MaterializeError::PermissionDenied { path, source },
            OsFailure::LimitExceeded => MaterializeError::LimitExceeded { path, source },
            OsFailure::NoSpace => MaterializeError::NoSpace { path, source },
            OsFailure::InvalidPath => MaterializeError::InvalidPath {
                path,
                reason: source.to_string(),
            },
            OsFailure::ParentMissing => MaterializeError::ParentMissing { path },
            OsFailure::AlreadyExists | OsFailure::Other => MaterializeError::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_kind() {
        let err = MaterializeError::NotADirectory {
            path: PathBuf::from("/x/file"),
        };
        assert_eq!(err.path(), Path::new("/x/file"));
        assert_eq!(err.kind(), "not_a_directory");
        assert_eq!(err.to_string(), "not a directory: /x/file");
    }

    #[cfg(unix)]
    #[test]
    fn test_from_os_permission() {
        let err = MaterializeError::from_os(
            Path::new("/locked/new"),
            io::Error::from_raw_os_error(nix::libc::EACCES),
        );
        assert!(matches!(err, MaterializeError::PermissionDenied { .. }));
        assert_eq!(err.path(), Path::new("/locked/new"));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_os_enotdir() {
        let err = MaterializeError::from_os(
            Path::new("/f/child"),
            io::Error::from_raw_os_error(nix::libc::ENOTDIR),
        );
        assert!(matches!(err, MaterializeError::NotADirectory { .. }));
    }
}
