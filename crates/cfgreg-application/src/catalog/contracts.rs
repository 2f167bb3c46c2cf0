//! Contract Catalog
//!
//! Named contract types, so configuration can list default contracts.

use cfgreg_domain::error::{Error, Result};
use cfgreg_domain::value_objects::TypeKey;

/// Catalog entry for a contract type
pub struct ContractEntry {
    /// Unique contract name used in configuration (e.g., "reader-interceptor")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Key of the contract type, usually `TypeKey::of::<dyn Trait>`
    pub key: fn() -> TypeKey,
}

#[linkme::distributed_slice]
pub static CONTRACTS: [ContractEntry] = [..];

/// Resolve a contract type by catalog name
pub fn resolve_contract(name: &str) -> Result<TypeKey> {
    CONTRACTS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| (entry.key)())
        .ok_or_else(|| {
            Error::unknown_name("contract", name, CONTRACTS.iter().map(|entry| entry.name))
        })
}

/// Resolve every name, failing on the first unknown one
pub fn resolve_contracts<S: AsRef<str>>(names: &[S]) -> Result<Vec<TypeKey>> {
    names
        .iter()
        .map(|name| resolve_contract(name.as_ref()))
        .collect()
}

/// List all registered contracts as (name, description) tuples
pub fn list_contracts() -> Vec<(&'static str, &'static str)> {
    CONTRACTS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
