//! Registry Bootstrap
//!
//! Composition root: builds a [`ConfigurationRegistry`] from configuration.
//!
//! ```text
//! RegistryConfig → DeclaredConfiguration ─┐
//!                → ConfiguredPriorities ──┼→ ConfigurationRegistry::inherit
//!                → default contracts ─────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//! let registry = build_registry(&config.registry)?;
//! ```

use cfgreg_application::ConfigurationRegistry;
use cfgreg_application::catalog::resolve_contracts;
use cfgreg_domain::error::Result;
use cfgreg_domain::ports::Configuration;
use tracing::info;

use super::priorities::ConfiguredPriorities;
use super::resolver::DeclaredConfiguration;
use crate::config::{AppConfig, ConfigLoader, RegistryConfig};

/// Build a registry from the `[registry]` configuration section
///
/// Declared providers are instantiated and bound to the default contracts,
/// each at its configured or declared priority.
pub fn build_registry(config: &RegistryConfig) -> Result<ConfigurationRegistry> {
    let declared = DeclaredConfiguration::resolve(config)?;
    let default_contracts = resolve_contracts(&config.default_contracts)?;
    let priorities = ConfiguredPriorities::resolve(&config.priorities)?;

    let registry = ConfigurationRegistry::inherit(&declared, &default_contracts, &priorities)?;

    info!(
        runtime = %registry.runtime_kind(),
        instances = registry.instances().len(),
        properties = registry.properties().len(),
        "Registry built from configuration"
    );
    Ok(registry)
}

/// Load configuration with `loader` and build its registry
pub fn load_registry(loader: &ConfigLoader) -> Result<(AppConfig, ConfigurationRegistry)> {
    let config = loader.load()?;
    let registry = build_registry(&config.registry)?;
    Ok((config, registry))
}
