//! Root-to-leaf directory materialization.
//!
//! Every missing ancestor of the target is created in order, parent first.
//! Creation is attempted and "already exists" is accepted after checking the
//! entry really is a directory, so concurrent callers racing on the same
//! prefix all succeed. Nothing is rolled back on failure.

use crate::constants;
use crate::core::error::MaterializeError;
use crate::models::options::{MaterializeOptions, SymlinkPolicy};
use crate::models::report::Materialized;
use crate::util::fs::{self as mk_fs, classify, OsFailure};
use crate::util::path as mk_path;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Creates exactly one directory whose parent already exists.
pub trait DirCreator {
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()>;
}

/// `mkdir(2)` on unix, `std::fs::create_dir` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirCreator;

impl DirCreator for OsDirCreator {
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()> {
        mk_fs::make_dir(path, mode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    Directory,
    Missing,
}

/// Look at one existing-or-not path component without changing anything.
pub(crate) fn probe(dir: &Path, policy: SymlinkPolicy) -> Result<Probe, MaterializeError> {
    let meta = match policy {
        SymlinkPolicy::Follow => fs::metadata(dir),
        SymlinkPolicy::Reject => fs::symlink_metadata(dir),
    };
    match meta {
        Ok(m) if m.file_type().is_symlink() => Err(MaterializeError::SymlinkRejected {
            path: dir.to_path_buf(),
        }),
        Ok(m) if m.is_dir() => Ok(Probe::Directory),
        Ok(_) => Err(MaterializeError::NotADirectory {
            path: dir.to_path_buf(),
        }),
        // Under Follow a dangling link stats as missing, yet mkdir on it fails.
        Err(err) if classify(&err) == OsFailure::ParentMissing => match fs::symlink_metadata(dir) {
            Ok(m) if m.file_type().is_symlink() => Err(MaterializeError::NotADirectory {
                path: dir.to_path_buf(),
            }),
            _ => Ok(Probe::Missing),
        },
        Err(err) => Err(MaterializeError::from_os(dir, err)),
    }
}

pub(crate) fn empty_path_error() -> MaterializeError {
    MaterializeError::InvalidPath {
        path: PathBuf::new(),
        reason: "empty path".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Materializer<C = OsDirCreator> {
    options: MaterializeOptions,
    creator: C,
}

impl Materializer<OsDirCreator> {
    pub fn new(options: MaterializeOptions) -> Self {
        Self::with_creator(options, OsDirCreator)
    }
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new(MaterializeOptions::default())
    }
}

impl<C: DirCreator> Materializer<C> {
    pub fn with_creator(options: MaterializeOptions, creator: C) -> Self {
        Self { options, creator }
    }

    pub fn options(&self) -> &MaterializeOptions {
        &self.options
    }

    /// Ensure `path` and all of its ancestors exist as directories.
    pub fn directory(&self, path: &Path) -> Result<Materialized, MaterializeError> {
        if path.as_os_str().is_empty() {
            return Err(empty_path_error());
        }
        if self.options.symlinks == SymlinkPolicy::Follow && path.is_dir() {
            return Ok(Materialized::default());
        }

        let mut created = Vec::new();
        let walked = self.walk_with_retries(path, &mut created);
        let chmod = if self.options.exact_mode {
            self.apply_exact_mode(&created)
        } else {
            Ok(())
        };
        walked.and(chmod)?;
        Ok(Materialized { created })
    }

    /// Ensure the directory holding the file `path` exists.
    ///
    /// A bare file name lives in the cwd and needs nothing.
    pub fn file_parent(&self, path: &Path) -> Result<Materialized, MaterializeError> {
        if path.as_os_str().is_empty() {
            return Err(empty_path_error());
        }
        match mk_path::file_parent(path) {
            Some(parent) => self.directory(parent),
            None => Ok(Materialized::default()),
        }
    }

    fn walk_with_retries(
        &self,
        path: &Path,
        created: &mut Vec<PathBuf>,
    ) -> Result<(), MaterializeError> {
        let mut attempt = 1;
        loop {
            match self.walk(path, created) {
                // An ancestor vanished after we saw or made it; start over.
                Err(MaterializeError::ParentMissing { .. })
                    if attempt < constants::MAX_WALK_ATTEMPTS =>
                {
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    fn walk(&self, path: &Path, created: &mut Vec<PathBuf>) -> Result<(), MaterializeError> {
        let mut missing = false;
        for dir in mk_path::ancestors_root_first(path) {
            if !missing {
                match probe(&dir, self.options.symlinks)? {
                    Probe::Directory => continue,
                    Probe::Missing => missing = true,
                }
            }
            self.create_one(&dir, created)?;
        }
        Ok(())
    }

    fn create_one(&self, dir: &Path, created: &mut Vec<PathBuf>) -> Result<(), MaterializeError> {
        match self.creator.create_dir(dir, self.options.mode) {
            Ok(()) => {
                if !created.iter().any(|c| c == dir) {
                    created.push(dir.to_path_buf());
                }
                Ok(())
            }
            Err(err) if classify(&err) == OsFailure::AlreadyExists => {
                match probe(dir, self.options.symlinks)? {
                    Probe::Directory => Ok(()),
                    // Exists per mkdir, gone again per stat.
                    Probe::Missing => Err(MaterializeError::NotADirectory {
                        path: dir.to_path_buf(),
                    }),
                }
            }
            Err(err) => Err(MaterializeError::from_os(dir, err)),
        }
    }

    fn apply_exact_mode(&self, created: &[PathBuf]) -> Result<(), MaterializeError> {
        // Leaf first, so a parent losing search permission cannot block its children.
        for dir in created.iter().rev() {
            mk_fs::set_permissions(dir, self.options.mode)
                .map_err(|err| MaterializeError::from_os(dir, err))?;
        }
        Ok(())
    }
}

/// Ensure a directory and its ancestors exist, with default options.
///
/// Returns `false` on any failure; already-existing directories are success.
pub fn materialize_directory<P: AsRef<Path>>(path: P) -> bool {
    materialize_directory_with(path, &MaterializeOptions::default())
}

pub fn materialize_directory_with<P: AsRef<Path>>(path: P, options: &MaterializeOptions) -> bool {
    Materializer::new(options.clone())
        .directory(path.as_ref())
        .is_ok()
}

/// Ensure the directory that would hold the file `path` exists.
pub fn materialize_file_parent<P: AsRef<Path>>(path: P) -> bool {
    materialize_file_parent_with(path, &MaterializeOptions::default())
}

pub fn materialize_file_parent_with<P: AsRef<Path>>(path: P, options: &MaterializeOptions) -> bool {
    Materializer::new(options.clone())
        .file_parent(path.as_ref())
        .is_ok()
}
