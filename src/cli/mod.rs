//! CLI routing and command dispatch.

use crate::core::config::{self, ConfigSource};
use crate::models::config::parse_mode;
use crate::models::options::{MaterializeOptions, SymlinkPolicy};
use crate::util::logging;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod create;
pub mod plan;
pub mod write;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub options: MaterializeOptions,
    pub source: ConfigSource,
}

#[derive(Parser, Debug)]
#[command(name = "mkpath", version, about = "Create directories along with every missing parent")]
pub struct Cli {
    /// Config file (defaults to ./mkpath.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Octal mode for new directories, before umask (e.g. 755)
    #[arg(long, global = true, value_name = "OCTAL")]
    pub mode: Option<String>,

    /// Chmod new directories to exactly --mode, ignoring the umask
    #[arg(long, global = true)]
    pub exact_mode: bool,

    /// Fail instead of following symbolic links in the path
    #[arg(long, global = true)]
    pub no_follow_symlinks: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let source = config::resolve(self.config.clone())?;
        let (file, config_warning) = config::load_source(&source)?;
        logging::init(file.log.level.as_deref());
        if let Some(w) = &config_warning {
            warn!("{}", w);
        }

        let options = self.apply_overrides(file.options()?)?;
        debug!(?source, ?options, "resolved options");

        let ctx = CliContext { options, source };

        match self.command {
            Commands::Dir(args) => create::run_dir(&ctx, args),
            Commands::Parent(args) => create::run_parent(&ctx, args),
            Commands::Plan(args) => plan::run(&ctx, args),
            Commands::Write(args) => write::run(&ctx, args),
        }
    }

    /// Command-line flags win over the config file.
    fn apply_overrides(&self, mut options: MaterializeOptions) -> Result<MaterializeOptions> {
        if let Some(raw) = &self.mode {
            options.mode = parse_mode(raw).context("invalid --mode")?;
        }
        if self.exact_mode {
            options.exact_mode = true;
        }
        if self.no_follow_symlinks {
            options.symlinks = SymlinkPolicy::Reject;
        }
        Ok(options)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create directories and their missing parents
    Dir(create::DirArgs),
    /// Create the parent directories of files
    Parent(create::ParentArgs),
    /// Show what would be created, without touching the filesystem
    Plan(plan::PlanArgs),
    /// Create a file's parents, then write stdin to it atomically
    Write(write::WriteArgs),
}
