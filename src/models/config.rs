//! Config file model (`mkpath.toml`).

use crate::constants;
use crate::models::options::{MaterializeOptions, SymlinkPolicy};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub create: CreateSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSection {
    /// Octal mode for new directories, e.g. "755" or "0o750".
    #[serde(default)]
    pub mode: Option<String>,

    /// Chmod new directories to exactly `mode`, bypassing the umask.
    #[serde(default)]
    pub exact_mode: bool,

    #[serde(default)]
    pub symlinks: SymlinkPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSection {
    /// `tracing` filter directive used when MKPATH_LOG is unset.
    #[serde(default)]
    pub level: Option<String>,
}

impl ConfigFile {
    pub fn options(&self) -> Result<MaterializeOptions> {
        let mode = match &self.create.mode {
            Some(raw) => parse_mode(raw).context("invalid create.mode in config")?,
            None => constants::DEFAULT_DIR_MODE,
        };
        Ok(MaterializeOptions {
            mode,
            exact_mode: self.create.exact_mode,
            symlinks: self.create.symlinks,
        })
    }
}

/// Parse an octal permission string; accepts an optional `0o` or leading `0`.
pub fn parse_mode(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
    if digits.is_empty() {
        bail!("empty mode");
    }
    let mode = u32::from_str_radix(digits, 8)
        .with_context(|| format!("'{}' is not an octal mode", raw))?;
    if mode > constants::MAX_DIR_MODE {
        bail!("mode {:o} exceeds {:o}", mode, constants::MAX_DIR_MODE);
    }
    Ok(mode)
}
