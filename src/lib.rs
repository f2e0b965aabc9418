//! Directory path materialization.
//!
//! Ensures every missing directory along a path exists, creating them
//! root-to-leaf and treating "already exists" as success so concurrent
//! creators never make each other fail.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Materializer, dry-run planner, error taxonomy, config loading
//! - `models` — Options, reports, config file model
//! - `util` — Filesystem primitives, path helpers, logging

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;

pub use crate::core::error::MaterializeError;
pub use crate::core::materialize::{
    materialize_directory, materialize_directory_with, materialize_file_parent,
    materialize_file_parent_with, DirCreator, Materializer, OsDirCreator,
};
pub use crate::core::plan::{plan_directory, plan_file_parent};
pub use crate::models::options::{MaterializeOptions, SymlinkPolicy};
pub use crate::models::report::{Materialized, Plan, PlanStep, StepState};
