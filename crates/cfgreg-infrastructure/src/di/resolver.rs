//! Declared Configuration Resolver
//!
//! Turns a [`RegistryConfig`] into a read-only [`Configuration`] that a
//! registry can inherit from. Names are resolved through the class catalog;
//! no concrete class is known here.
//!
//! ```text
//! Config: providers = ["gzip"], features = { tracing = true }
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────┐
//! │  DeclaredConfiguration::resolve()    │
//! └─────────────────────────────────────┘
//!          │                    │
//!          ▼                    ▼
//!   PROVIDER_CLASSES      create_provider()
//!   (class only)          (features only)
//! ```

use std::sync::Arc;

use cfgreg_application::catalog::resolve_provider_class;
use cfgreg_application::create_provider;
use cfgreg_domain::error::{Error, Result};
use cfgreg_domain::ports::{Component, Configuration, Feature, Properties};
use cfgreg_domain::value_objects::{ContractMap, ProviderClass, RuntimeKind, TypeKey};
use tracing::debug;

use crate::config::RegistryConfig;

/// Configuration declared by name in a config file
///
/// Providers stay class references until a child registry inherits them.
/// Features are instantiated right away, each with its configured flag.
pub struct DeclaredConfiguration {
    runtime_kind: RuntimeKind,
    properties: Properties,
    providers: Vec<ProviderClass>,
    features: Vec<(Arc<dyn Feature>, bool)>,
}

impl DeclaredConfiguration {
    /// Resolve every declared name
    ///
    /// # Returns
    /// * `Ok(DeclaredConfiguration)` - All names resolved
    /// * `Err(Error::UnknownName)` - A name is missing from the catalog
    /// * `Err(Error::ProviderConstruction)` - A feature could not be built
    /// * `Err(Error::Config)` - A name under `features` is not a feature
    pub fn resolve(config: &RegistryConfig) -> Result<Self> {
        let properties = config
            .properties
            .iter()
            .filter(|(name, value)| !name.is_empty() && !value.is_null())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let mut providers = Vec::with_capacity(config.providers.len());
        for name in &config.providers {
            let class = resolve_provider_class(name)?;
            debug!(name = name.as_str(), class = class.name(), "Resolved declared provider");
            if !providers.contains(&class) {
                providers.push(class);
            }
        }

        let mut features = Vec::with_capacity(config.features.len());
        for (name, enabled) in &config.features {
            let class = resolve_provider_class(name)?;
            let feature = create_provider(&class)?
                .into_feature()
                .ok_or_else(|| Error::config(format!("'{name}' is not a feature class")))?;
            debug!(name = name.as_str(), enabled, "Resolved declared feature");
            features.push((feature, *enabled));
        }

        Ok(Self {
            runtime_kind: config.runtime,
            properties,
            providers,
            features,
        })
    }
}

impl Configuration for DeclaredConfiguration {
    fn runtime_kind(&self) -> RuntimeKind {
        self.runtime_kind
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn classes(&self) -> Vec<ProviderClass> {
        let mut classes = self.providers.clone();
        for (feature, _) in &self.features {
            let class = feature.class();
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        classes
    }

    fn instances(&self) -> Vec<Arc<dyn Component>> {
        self.features
            .iter()
            .map(|(feature, _)| {
                let instance: Arc<dyn Component> = feature.clone();
                instance
            })
            .collect()
    }

    fn contracts(&self, _target: TypeKey) -> ContractMap {
        ContractMap::new()
    }

    fn explicit_contracts(&self, _target: TypeKey) -> Option<ContractMap> {
        None
    }

    fn is_enabled(&self, feature: &dyn Feature) -> bool {
        self.feature_flag(feature).is_some()
    }

    fn is_enabled_class(&self, class: &ProviderClass) -> bool {
        self.features
            .iter()
            .any(|(feature, _)| feature.class().is_assignable_from(class))
    }

    fn feature_flag(&self, feature: &dyn Feature) -> Option<bool> {
        let feature: &dyn Component = feature;
        self.features
            .iter()
            .find(|(candidate, _)| candidate.eq_component(feature))
            .map(|(_, enabled)| *enabled)
    }
}

impl std::fmt::Debug for DeclaredConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclaredConfiguration")
            .field("runtime_kind", &self.runtime_kind)
            .field("properties", &self.properties.len())
            .field(
                "providers",
                &self.providers.iter().map(ProviderClass::name).collect::<Vec<_>>(),
            )
            .field("features", &self.features.len())
            .finish()
    }
}
