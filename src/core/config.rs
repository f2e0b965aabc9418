//! Config file discovery and loading.

use crate::constants;
use crate::models::config::ConfigFile;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a config file came from; decides how parse failures are treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or MKPATH_CONFIG; must load.
    Explicit(PathBuf),
    /// `mkpath.toml` found in the cwd; best-effort.
    Discovered(PathBuf),
    Defaults,
}

/// Resolve the config location from CLI arg, env var, or the cwd.
pub fn resolve(config_arg: Option<PathBuf>) -> Result<ConfigSource> {
    if let Some(path) = config_arg {
        return Ok(ConfigSource::Explicit(path));
    }
    if let Some(path) = env::var_os(constants::CONFIG_ENV) {
        if !path.is_empty() {
            return Ok(ConfigSource::Explicit(PathBuf::from(path)));
        }
    }
    let cwd = env::current_dir().context("resolve current directory")?;
    Ok(discover_in(&cwd))
}

fn discover_in(dir: &Path) -> ConfigSource {
    let candidate = dir.join(constants::CONFIG_FILE_NAME);
    if candidate.is_file() {
        ConfigSource::Discovered(candidate)
    } else {
        ConfigSource::Defaults
    }
}

pub fn load(path: &Path) -> Result<ConfigFile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: ConfigFile =
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
    // Surface a bad mode at load time rather than on first use.
    config
        .options()
        .with_context(|| format!("validate config {}", path.display()))?;
    Ok(config)
}

/// Load config for `source`; a broken discovered file yields defaults plus a warning.
pub fn load_source(source: &ConfigSource) -> Result<(ConfigFile, Option<String>)> {
    match source {
        ConfigSource::Explicit(path) => Ok((load(path)?, None)),
        ConfigSource::Discovered(path) => match load(path) {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((
                ConfigFile::default(),
                Some(format!("ignoring {}: {:#}", path.display(), e)),
            )),
        },
        ConfigSource::Defaults => Ok((ConfigFile::default(), None)),
    }
}
