//! Registry configuration types
//!
//! Declares the content of a registry by catalog name:
//!
//! ```toml
//! [registry]
//! runtime = "client"
//! providers = ["gzip", "status-mapper"]
//! default_contracts = ["reader-interceptor", "writer-interceptor"]
//!
//! [registry.features]
//! tracing = true
//!
//! [registry.priorities]
//! gzip = 3000
//!
//! [registry.properties]
//! "http.timeout" = 30
//! ```

use cfgreg_domain::RuntimeKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registry configuration section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Runtime kind of the built registry
    pub runtime: RuntimeKind,

    /// Property values, stored as given
    pub properties: BTreeMap<String, serde_json::Value>,

    /// Provider class names, instantiated when the registry is built
    pub providers: Vec<String>,

    /// Feature class names and their enabled flag
    pub features: BTreeMap<String, bool>,

    /// Binding priority overrides by provider class name
    pub priorities: BTreeMap<String, i32>,

    /// Contract names providers are bound to
    pub default_contracts: Vec<String>,
}
