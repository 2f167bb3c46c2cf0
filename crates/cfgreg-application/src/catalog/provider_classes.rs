//! Provider Class Catalog
//!
//! Auto-registration system for provider and feature classes.
//! Crates register their classes via `#[linkme::distributed_slice]` and
//! configuration files refer to them by name.

use cfgreg_domain::error::{Error, Result};
use cfgreg_domain::value_objects::ProviderClass;

/// Catalog entry for a registrable class
///
/// # Example
///
/// ```ignore
/// use cfgreg_application::catalog::{PROVIDER_CLASSES, ProviderClassEntry};
///
/// #[linkme::distributed_slice(PROVIDER_CLASSES)]
/// static GZIP: ProviderClassEntry = ProviderClassEntry {
///     name: "gzip",
///     description: "Gzip entity codec",
///     class: GzipCodec::provider_class,
/// };
/// ```
pub struct ProviderClassEntry {
    /// Unique class name used in configuration (e.g., "gzip", "tracing")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds the class reference
    pub class: fn() -> ProviderClass,
}

// Auto-collection via linkme distributed slices - classes submit entries at compile time
#[linkme::distributed_slice]
pub static PROVIDER_CLASSES: [ProviderClassEntry] = [..];

/// Resolve a class reference by catalog name
///
/// # Returns
/// * `Ok(ProviderClass)` - Class reference of the first entry with that name
/// * `Err(Error::UnknownName)` - No entry matched; the error lists the known names
pub fn resolve_provider_class(name: &str) -> Result<ProviderClass> {
    PROVIDER_CLASSES
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| (entry.class)())
        .ok_or_else(|| {
            Error::unknown_name(
                "provider class",
                name,
                PROVIDER_CLASSES.iter().map(|entry| entry.name),
            )
        })
}

/// List all registered classes
///
/// Returns (name, description) tuples, first registration wins on duplicate
/// names.
pub fn list_provider_classes() -> Vec<(&'static str, &'static str)> {
    let mut classes: Vec<(&'static str, &'static str)> = Vec::new();
    for entry in PROVIDER_CLASSES {
        if !classes.iter().any(|(name, _)| *name == entry.name) {
            classes.push((entry.name, entry.description));
        }
    }
    classes
}
