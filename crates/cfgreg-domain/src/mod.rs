//! # Domain Layer
//!
//! Core types of the configuration registry: how component types are
//! identified, how contract assignability is decided, and the ports the
//! registry core talks to.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `TypeKey`, `ProviderClass`, `RuntimeKind` |
//! | [`ports`] | `Component`, `Feature`, `Configuration`, `BindingPriorityLookup` |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Binding priority constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{BoxError, Error, Result};
pub use ports::{
    BindingPriorityLookup, Component, Configuration, DeclaredPriority, Feature, Properties,
    component_eq,
};
pub use value_objects::{ContractMap, ProviderClass, RuntimeKind, TypeKey};
