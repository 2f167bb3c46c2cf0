//! Domain Port Interfaces
//!
//! Boundary contracts between the registry core and its collaborators.
//!
//! ## Organization
//!
//! - **component** - The object model of registrable providers and features
//! - **configuration** - Read view over a registry, consumed by child registries
//! - **metadata** - Default binding priority lookup, injected at inheritance

/// Registrable component model
pub mod component;
/// Read-only configuration view
pub mod configuration;
/// Binding priority lookup
pub mod metadata;

pub use component::{Component, Feature, component_eq};
pub use configuration::{Configuration, Properties};
pub use metadata::{BindingPriorityLookup, DeclaredPriority};
