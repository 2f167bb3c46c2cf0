//! Configuration Registry
//!
//! The in-process registry of properties, providers and features.
//!
//! ```text
//! ┌──────────────────────── ConfigurationRegistry ────────────────────────┐
//! │  properties    name → serde_json::Value                               │
//! │  providers     Arc<dyn Component> → { contract TypeKey → priority }    │
//! │  features      Arc<dyn Feature>   → enabled                            │
//! │  runtime kind  Client | Server (fixed)                                 │
//! └───────────────────────────────────────────────────────────────────────┘
//!          ▲ register / set_property / set_feature      │ Configuration
//!          │                                            ▼
//!      setup code                              consumers, child registries
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use cfgreg_application::registry::ConfigurationRegistry;
//! use cfgreg_domain::{Configuration, RuntimeKind, TypeKey};
//!
//! let mut registry = ConfigurationRegistry::new(RuntimeKind::Server);
//! registry.register_with_priority(GzipCodec::class(), 4000, &[TypeKey::of::<dyn Codec>()])?;
//! let bindings = registry.contracts(TypeKey::of::<dyn Codec>());
//! ```

pub mod configuration;
pub mod contracts;
pub mod factory;
pub mod registration;

pub use configuration::ConfigurationRegistry;
pub use contracts::init_contracts_map;
pub use factory::create_provider;
pub use registration::Registration;
