//! Dry-run of a materialization walk.

use crate::core::materialize::{empty_path_error, probe, Probe};
use crate::models::options::MaterializeOptions;
use crate::models::report::{Plan, PlanStep, StepState};
use crate::util::path as mk_path;
use std::path::Path;

/// Probe each ancestor of `path`, root first, without creating anything.
pub fn plan_directory(path: &Path, options: &MaterializeOptions) -> Plan {
    let mut plan = Plan {
        target: path.to_path_buf(),
        steps: Vec::new(),
        blocker: None,
    };
    if path.as_os_str().is_empty() {
        plan.blocker = Some(empty_path_error());
        return plan;
    }

    let mut missing = false;
    for dir in mk_path::ancestors_root_first(path) {
        let state = if missing {
            StepState::Missing
        } else {
            match probe(&dir, options.symlinks) {
                Ok(Probe::Directory) => StepState::Exists,
                Ok(Probe::Missing) => {
                    missing = true;
                    StepState::Missing
                }
                Err(err) => {
                    plan.blocker = Some(err);
                    break;
                }
            }
        };
        plan.steps.push(PlanStep { path: dir, state });
    }
    plan
}

/// Like [`plan_directory`] for the directory that would hold the file `path`.
pub fn plan_file_parent(path: &Path, options: &MaterializeOptions) -> Plan {
    if path.as_os_str().is_empty() {
        return plan_directory(path, options);
    }
    match mk_path::file_parent(path) {
        Some(parent) => plan_directory(parent, options),
        None => Plan {
            target: path.to_path_buf(),
            steps: Vec::new(),
            blocker: None,
        },
    }
}
