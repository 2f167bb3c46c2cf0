//! Provider construction from class references

use std::sync::Arc;

use cfgreg_domain::error::{Error, Result};
use cfgreg_domain::ports::Component;
use cfgreg_domain::value_objects::ProviderClass;

/// Instantiate `class` through its no-argument constructor
///
/// A class without a constructor and a constructor that fails both surface
/// as [`Error::ProviderConstruction`].
pub fn create_provider(class: &ProviderClass) -> Result<Arc<dyn Component>> {
    let constructor = class
        .constructor()
        .ok_or_else(|| Error::provider_construction(class.name()))?;

    constructor().map_err(|source| Error::provider_construction_with_source(class.name(), source))
}
