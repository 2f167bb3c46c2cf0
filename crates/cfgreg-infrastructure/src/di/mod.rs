//! Registry Composition
//!
//! Wiring between configuration and the registry core. Classes and contracts
//! are found through the linkme catalog, so this module names no concrete
//! provider.
//!
//! - **resolver** - [`DeclaredConfiguration`], a parent built from config
//! - **priorities** - [`ConfiguredPriorities`], the binding priority lookup
//! - **bootstrap** - [`build_registry`], the composition root

pub mod bootstrap;
pub mod priorities;
pub mod resolver;

pub use bootstrap::{build_registry, load_registry};
pub use priorities::ConfiguredPriorities;
pub use resolver::DeclaredConfiguration;
