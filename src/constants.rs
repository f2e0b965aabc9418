//! Centralized constants for creation modes, config discovery, and limits.

/// Mode passed to `mkdir(2)` for new directories; the process umask still applies.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Largest mode accepted from config or the command line.
pub const MAX_DIR_MODE: u32 = 0o7777;

/// Config file picked up from the current directory when none is given.
pub const CONFIG_FILE_NAME: &str = "mkpath.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MKPATH_CONFIG";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "MKPATH_LOG";

/// Log filter used when neither env nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How many times a walk restarts after an ancestor vanished mid-creation.
pub const MAX_WALK_ATTEMPTS: usize = 3;
