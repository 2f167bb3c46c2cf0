//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `cfgreg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cfgreg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cfgreg";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CFGREG";

/// Separator for nested keys in environment variables (`CFGREG__LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CFGREG_LOG";


