//! Write stdin to a file whose parent directories may not exist yet.

use crate::cli::CliContext;
use crate::core::materialize::Materializer;
use crate::util::path as mk_path;
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Destination file
    pub path: PathBuf,
}

pub fn run(ctx: &CliContext, args: WriteArgs) -> Result<()> {
    let report = Materializer::new(ctx.options.clone())
        .file_parent(&args.path)
        .with_context(|| format!("prepare parent directory of {}", args.path.display()))?;
    for dir in &report.created {
        debug!(path = %dir.display(), "created directory");
    }

    let mut content = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut content)
        .context("read stdin")?;
    write_atomic(&args.path, &content)?;
    info!(path = %args.path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Replace `path` with `content` via a temp file in the same directory.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = mk_path::file_parent(path).unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(content)
        .with_context(|| format!("write {}", path.display()))?;
    tmp.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    tmp.persist(path)
        .map_err(|err| anyhow::anyhow!("persist {}: {}", path.display(), err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::materialize::materialize_file_parent;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_after_parent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("level/scene.py");
        assert!(materialize_file_parent(&file));
        write_atomic(&file, b"objects = {}\n").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "objects = {}\n");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("data.txt");
        fs::write(&file, "old").unwrap();
        write_atomic(&file, b"new").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_onto_directory_fails() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"").unwrap();
        assert!(write_atomic(&target, b"x").is_err());
        assert!(target.join("keep").exists());
    }

    #[test]
    fn test_write_atomic_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("absent/data.txt");
        assert!(write_atomic(&file, b"x").is_err());
    }
}
