//! Class and Contract Catalog
//!
//! Compile-time registration of provider classes and contract types, so that
//! configuration files can name them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Class Registration Flow                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Crate defines:   #[linkme::distributed_slice(PROVIDER_CLASSES)]
//! │                      static ENTRY: ProviderClassEntry = ...     │
//! │                              ↓                                  │
//! │  2. Catalog declares: #[linkme::distributed_slice]              │
//! │                       pub static PROVIDER_CLASSES: [Entry]      │
//! │                              ↓                                  │
//! │  3. Config names:    providers = ["gzip"]                       │
//! │                              ↓                                  │
//! │  4. Resolver returns: ProviderClass (not yet instantiated)      │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod contracts;
pub mod provider_classes;

pub use contracts::{
    CONTRACTS, ContractEntry, list_contracts, resolve_contract, resolve_contracts,
};
pub use provider_classes::{
    PROVIDER_CLASSES, ProviderClassEntry, list_provider_classes, resolve_provider_class,
};
