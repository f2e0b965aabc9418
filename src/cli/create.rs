use crate::cli::CliContext;
use crate::core::error::MaterializeError;
use crate::core::materialize::Materializer;
use crate::models::report::Materialized;
use anyhow::{bail, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug)]
pub struct DirArgs {
    /// Directories to create
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
    /// Output format (text|json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct ParentArgs {
    /// Files whose parent directories should exist
    #[arg(required = true, value_name = "FILE")]
    pub paths: Vec<PathBuf>,
    /// Output format (text|json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Directory,
    FileParent,
}

pub fn run_dir(ctx: &CliContext, args: DirArgs) -> Result<()> {
    run_each(ctx, &args.paths, &args.format, Target::Directory)
}

pub fn run_parent(ctx: &CliContext, args: ParentArgs) -> Result<()> {
    run_each(ctx, &args.paths, &args.format, Target::FileParent)
}

/// Every path is attempted; the command fails if any of them did.
fn run_each(ctx: &CliContext, paths: &[PathBuf], format: &str, target: Target) -> Result<()> {
    let materializer = Materializer::new(ctx.options.clone());
    let mut results: Vec<(&Path, Result<Materialized, MaterializeError>)> = Vec::new();

    for path in paths {
        let outcome = match target {
            Target::Directory => materializer.directory(path),
            Target::FileParent => materializer.file_parent(path),
        };
        match &outcome {
            Ok(report) => {
                for dir in &report.created {
                    debug!(path = %dir.display(), "created directory");
                }
            }
            Err(e) => debug!(path = %path.display(), kind = e.kind(), "materialization failed"),
        }
        results.push((path.as_path(), outcome));
    }

    if format == "json" {
        let items: Vec<serde_json::Value> = results
            .iter()
            .map(|(path, outcome)| result_json(path, outcome))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for (path, outcome) in &results {
            match outcome {
                Ok(report) => {
                    for dir in &report.created {
                        println!("created {}", dir.display());
                    }
                }
                Err(e) => eprintln!("error: {}: {}", path.display(), e),
            }
        }
    }

    let failures = results.iter().filter(|(_, o)| o.is_err()).count();
    if failures > 0 {
        bail!(
            "{} of {} path(s) could not be materialized",
            failures,
            results.len()
        );
    }
    Ok(())
}

fn result_json(path: &Path, outcome: &Result<Materialized, MaterializeError>) -> serde_json::Value {
    match outcome {
        Ok(report) => serde_json::json!({
            "path": path.display().to_string(),
            "ok": true,
            "created": report
                .created
                .iter()
                .map(|d| d.display().to_string())
                .collect::<Vec<_>>(),
        }),
        Err(e) => serde_json::json!({
            "path": path.display().to_string(),
            "ok": false,
            "kind": e.kind(),
            "at": e.path().display().to_string(),
            "error": e.to_string(),
        }),
    }
}
