//! Data structures shared by the core and the CLI.

pub mod config;
pub mod options;
pub mod report;
