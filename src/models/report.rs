//! Results of materialization and dry-run planning.

use crate::core::error::MaterializeError;
use std::path::{Path, PathBuf};

/// Directories a single call created, root-to-leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Materialized {
    pub created: Vec<PathBuf>,
}

impl Materialized {
    /// True when the call found everything in place and touched nothing.
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Exists,
    Missing,
}

impl StepState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepState::Exists => "exists",
            StepState::Missing => "missing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub path: PathBuf,
    pub state: StepState,
}

/// Read-only preview of what materializing `target` would do.
///
/// `steps` covers the ancestors probed before a blocker was hit; when
/// `blocker` is set the walk would fail at `blocker.path()`.
#[derive(Debug)]
pub struct Plan {
    pub target: PathBuf,
    pub steps: Vec<PlanStep>,
    pub blocker: Option<MaterializeError>,
}

impl Plan {
    pub fn would_succeed(&self) -> bool {
        self.blocker.is_none()
    }

    /// Directories that would be created, root-to-leaf.
    pub fn missing(&self) -> impl Iterator<Item = &Path> {
        self.steps
            .iter()
            .filter(|s| s.state == StepState::Missing)
            .map(|s| s.path.as_path())
    }
}
