//! Dry-run preview of a materialization.

use crate::cli::CliContext;
use crate::core::plan::{plan_directory, plan_file_parent};
use crate::models::report::Plan;
use anyhow::{bail, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Directory (or, with --parent, file) to preview
    pub path: PathBuf,
    /// Treat PATH as a file and plan its parent directory
    #[arg(long)]
    pub parent: bool,
    /// Output format (text|json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(ctx: &CliContext, args: PlanArgs) -> Result<()> {
    let plan = if args.parent {
        plan_file_parent(&args.path, &ctx.options)
    } else {
        plan_directory(&args.path, &ctx.options)
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&plan_json(&plan))?);
    } else {
        print_table(&plan);
    }

    if let Some(blocker) = &plan.blocker {
        bail!("plan for {} is blocked: {}", plan.target.display(), blocker);
    }
    Ok(())
}

fn plan_json(plan: &Plan) -> serde_json::Value {
    let steps: Vec<serde_json::Value> = plan
        .steps
        .iter()
        .map(|s| {
            serde_json::json!({
                "path": s.path.display().to_string(),
                "state": s.state.as_str(),
            })
        })
        .collect();
    let blocker = plan.blocker.as_ref().map(|b| {
        serde_json::json!({
            "kind": b.kind(),
            "at": b.path().display().to_string(),
            "error": b.to_string(),
        })
    });
    serde_json::json!({
        "target": plan.target.display().to_string(),
        "would_succeed": plan.would_succeed(),
        "create": plan.missing().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "steps": steps,
        "blocker": blocker,
    })
}

fn print_table(plan: &Plan) {
    println!("Plan: {}", plan.target.display());
    if plan.steps.is_empty() && plan.blocker.is_none() {
        println!("  nothing to create");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Directory").add_attribute(Attribute::Bold),
        Cell::new("State").add_attribute(Attribute::Bold),
    ]);
    for step in &plan.steps {
        table.add_row(vec![step.path.display().to_string(), step.state.as_str().to_string()]);
    }
    if let Some(blocker) = &plan.blocker {
        table.add_row(vec![
            blocker.path().display().to_string(),
            format!("BLOCKED: {}", blocker.kind()),
        ]);
    }
    println!("{}", table);

    let count = plan.missing().count();
    if plan.would_succeed() {
        println!("\n{} directories would be created.", count);
    }
}
