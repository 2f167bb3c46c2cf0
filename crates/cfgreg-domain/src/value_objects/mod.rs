//! Domain Value Objects
//!
//! Immutable descriptors the registry keys its metadata by.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeKey`] | Identity of a contract or concrete type |
//! | [`ProviderClass`] | Class reference: key, contracts, priority, constructor |
//! | [`RuntimeKind`] | Client or server context of a registry |

/// Class references for registrable component types
pub mod provider_class;
/// Runtime kind tag
pub mod runtime_kind;
/// Type identity keys
pub mod type_key;

pub use provider_class::{Constructor, ProviderClass};
pub use runtime_kind::RuntimeKind;
pub use type_key::{ContractMap, TypeKey};
