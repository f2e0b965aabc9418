//! Directory creation primitive and OS error classification.

use std::fs;
use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// What an OS error means to a directory walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFailure {
    AlreadyExists,
    ParentMissing,
    NotADirectory,
    PermissionDenied,
    LimitExceeded,
    NoSpace,
    InvalidPath,
    Other,
}

/// Create a single directory; the parent must already exist.
#[cfg(unix)]
pub fn make_dir(path: &Path, mode: u32) -> io::Result<()> {
    use nix::sys::stat::Mode;
    nix::unistd::mkdir(path, Mode::from_bits_truncate(mode as nix::libc::mode_t))
        .map_err(io::Error::from)
}

#[cfg(not(unix))]
pub fn make_dir(path: &Path, _mode: u32) -> io::Result<()> {
    fs::create_dir(path)
}

pub fn set_permissions(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    {
        let _ = (path, mode);
    }
    Ok(())
}

#[cfg(unix)]
pub fn classify(err: &io::Error) -> OsFailure {
    use nix::libc;
    match err.raw_os_error() {
        Some(libc::EEXIST) => OsFailure::AlreadyExists,
        Some(libc::ENOENT) => OsFailure::ParentMissing,
        Some(libc::ENOTDIR) => OsFailure::NotADirectory,
        Some(libc::EACCES | libc::EPERM | libc::EROFS) => OsFailure::PermissionDenied,
        Some(libc::ENAMETOOLONG | libc::ELOOP | libc::EMLINK) => OsFailure::LimitExceeded,
        Some(libc::ENOSPC | libc::EDQUOT) => OsFailure::NoSpace,
        Some(libc::EINVAL) => OsFailure::InvalidPath,
        _ => classify_kind(err.kind()),
    }
}

#[cfg(not(unix))]
pub fn classify(err: &io::Error) -> OsFailure {
    classify_kind(err.kind())
}

fn classify_kind(kind: io::ErrorKind) -> OsFailure {
    match kind {
        io::ErrorKind::AlreadyExists => OsFailure::AlreadyExists,
        io::ErrorKind::NotFound => OsFailure::ParentMissing,
        io::ErrorKind::PermissionDenied => OsFailure::PermissionDenied,
        io::ErrorKind::InvalidInput => OsFailure::InvalidPath,
        _ => OsFailure::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_make_dir_creates_single_level() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("one");
        make_dir(&target, 0o755).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_make_dir_existing_is_already_exists() {
        let dir = TempDir::new().unwrap();
        let err = make_dir(dir.path(), 0o755).unwrap_err();
        assert_eq!(classify(&err), OsFailure::AlreadyExists);
    }

    #[test]
    fn test_make_dir_missing_parent() {
        let dir = TempDir::new().unwrap();
        let err = make_dir(&dir.path().join("a/b"), 0o755).unwrap_err();
        assert_eq!(classify(&err), OsFailure::ParentMissing);
    }

    #[cfg(unix)]
    #[test]
    fn test_make_dir_through_file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, b"x").unwrap();
        let err = make_dir(&file.join("child"), 0o755).unwrap_err();
        assert_eq!(classify(&err), OsFailure::NotADirectory);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_errno_table() {
        let cases = [
            (nix::libc::EACCES, OsFailure::PermissionDenied),
            (nix::libc::EROFS, OsFailure::PermissionDenied),
            (nix::libc::ENAMETOOLONG, OsFailure::LimitExceeded),
            (nix::libc::ENOSPC, OsFailure::NoSpace),
            (nix::libc::EINVAL, OsFailure::InvalidPath),
            (nix::libc::EIO, OsFailure::Other),
        ];
        for (code, expected) in cases {
            assert_eq!(classify(&io::Error::from_raw_os_error(code)), expected);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_set_permissions_exact() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("perm");
        make_dir(&target, 0o700).unwrap();
        set_permissions(&target, 0o751).unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o7777;
        assert_eq!(mode, 0o751);
    }
}
