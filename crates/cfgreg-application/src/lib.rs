//! Application Layer - cfgreg
//!
//! The configuration registry itself and the catalog that lets configuration
//! files refer to provider classes and contracts by name.
//!
//! ## Modules
//!
//! - `registry`: [`ConfigurationRegistry`], registration, inheritance
//! - `catalog`: linkme distributed slices of provider classes and contracts
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cfgreg-domain`: type descriptors, component model and ports
//! - `tracing` for diagnostics and `linkme` for the catalog

pub mod catalog;
pub mod registry;

pub use registry::{ConfigurationRegistry, Registration, create_provider, init_contracts_map};
