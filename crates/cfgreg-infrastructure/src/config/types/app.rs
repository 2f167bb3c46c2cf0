//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::registry::RegistryConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Registry content
    pub registry: RegistryConfig,

    /// Logging setup
    pub logging: LoggingConfig,
}
