//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the registry core.
//!
//! ## Module Categories
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML and environment configuration via figment |
//! | [`di`] | Declared configuration and registry bootstrap |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension mapping foreign errors to the domain error |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
pub use di::{ConfiguredPriorities, DeclaredConfiguration, build_registry, load_registry};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
