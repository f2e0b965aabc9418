//! Utility modules for filesystem primitives, paths, and logging.

pub mod fs;
pub mod logging;
pub mod path;
