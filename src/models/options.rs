//! Knobs controlling how directories are created.

use crate::constants;
use serde::{Deserialize, Serialize};

/// What to do with symbolic links found among the existing path components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymlinkPolicy {
    /// Resolve links; a link to a directory counts as a directory.
    #[default]
    Follow,
    /// Fail on any existing component that is a link.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Mode handed to the creation primitive (umask applies).
    pub mode: u32,
    /// Chmod created directories to exactly `mode`, ignoring the umask.
    pub exact_mode: bool,
    pub symlinks: SymlinkPolicy,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self {
            mode: constants::DEFAULT_DIR_MODE,
            exact_mode: false,
            symlinks: SymlinkPolicy::Follow,
        }
    }
}

impl MaterializeOptions {
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_exact_mode(mut self, exact: bool) -> Self {
        self.exact_mode = exact;
        self
    }

    pub fn with_symlinks(mut self, policy: SymlinkPolicy) -> Self {
        self.symlinks = policy;
        self
    }
}
