//! Core logic: materializer, planner, errors, config loading.

pub mod config;
pub mod error;
pub mod materialize;
pub mod plan;
