//! # cfgreg
//!
//! A registry of properties, providers and features, where every provider is
//! bound to the contracts it serves at a priority.
//!
//! This crate is the public facade: it re-exports the domain types, the
//! registry itself and the configuration-driven bootstrap.
//!
//! ## Example
//!
//! ```
//! use cfgreg::prelude::*;
//!
//! trait Codec {}
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Gzip;
//!
//! impl Codec for Gzip {}
//!
//! impl Component for Gzip {
//!     fn class(&self) -> ProviderClass {
//!         ProviderClass::of::<Gzip>()
//!             .implements::<dyn Codec>()
//!             .default_constructible::<Gzip>()
//!     }
//!
//!     fn eq_component(&self, other: &dyn Component) -> bool {
//!         component_eq(self, other)
//!     }
//! }
//!
//! let codec = TypeKey::of::<dyn Codec>();
//! let mut registry = ConfigurationRegistry::new(RuntimeKind::Client);
//! registry.set_property("user_agent", Some(serde_json::json!("cfgreg")));
//! assert!(registry.register_with_priority(Registration::instance(Gzip), 100, &[codec])?);
//!
//! assert_eq!(registry.contracts(codec).get(&codec), Some(&100));
//! assert!(registry.is_registered(&Gzip));
//! # Ok::<(), cfgreg::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Type keys, class references, the component model and ports
//! - `application` - The configuration registry and the class catalog
//! - `infrastructure` - Config loading, logging and registry bootstrap

/// Domain layer - type descriptors, component model and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cfgreg_domain::*;
}

/// Application layer - registry and class catalog
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cfgreg_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cfgreg_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{ConfigurationRegistry, Registration};
pub use infrastructure::{AppConfig, ConfigLoader, build_registry, init_logging};

/// Everything needed to define components and build registries
pub mod prelude {
    pub use cfgreg_application::catalog::{
        CONTRACTS, ContractEntry, PROVIDER_CLASSES, ProviderClassEntry,
    };
    pub use cfgreg_application::{ConfigurationRegistry, Registration};
    pub use cfgreg_domain::{
        BindingPriorityLookup, Component, Configuration, ContractMap, DeclaredPriority, Feature,
        ProviderClass, RuntimeKind, TypeKey, component_eq,
    };
    pub use cfgreg_infrastructure::{ConfigLoader, ConfiguredPriorities, build_registry};
}
