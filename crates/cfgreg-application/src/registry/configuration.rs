//! Configuration registry
//!
//! Holds properties, providers with their contract bindings, and features with
//! their enabled flag. A registry is either created empty for a runtime kind or
//! inherited from a parent [`Configuration`].
//!
//! Instances are kept in insertion order: providers in registration order,
//! then features. Every "first match" query follows that order.

use std::sync::Arc;

use cfgreg_domain::error::Result;
use cfgreg_domain::ports::{BindingPriorityLookup, Component, Configuration, Feature, Properties};
use cfgreg_domain::value_objects::{ContractMap, ProviderClass, RuntimeKind, TypeKey};
use serde_json::Value;
use tracing::{debug, warn};

use super::contracts::init_contracts_map;
use super::factory::create_provider;
use super::registration::Registration;

struct ProviderEntry {
    instance: Arc<dyn Component>,
    contracts: ContractMap,
}

struct FeatureEntry {
    feature: Arc<dyn Feature>,
    enabled: bool,
}

/// Registry of properties, providers and features
pub struct ConfigurationRegistry {
    properties: Properties,
    runtime_kind: RuntimeKind,
    providers: Vec<ProviderEntry>,
    features: Vec<FeatureEntry>,
}

impl ConfigurationRegistry {
    /// Create an empty registry for `runtime_kind`
    pub fn new(runtime_kind: RuntimeKind) -> Self {
        Self {
            properties: Properties::new(),
            runtime_kind,
            providers: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Create a registry that inherits from `parent`
    ///
    /// Features keep the flag the parent stores for them. Providers keep the
    /// parent's contract map whenever the parent holds one, even an empty
    /// map; otherwise they are bound to `default_contracts` at the priority
    /// `lookup` gives their class.
    /// Classes the parent knows without an instance are constructed here, so
    /// a construction failure aborts the whole inheritance.
    pub fn inherit(
        parent: &dyn Configuration,
        default_contracts: &[TypeKey],
        lookup: &dyn BindingPriorityLookup,
    ) -> Result<Self> {
        let mut registry = Self::new(parent.runtime_kind());
        registry.properties = parent.properties().clone();

        let mut uninstantiated = parent.classes();
        for instance in parent.instances() {
            let class = instance.class();
            match Arc::clone(&instance).into_feature() {
                Some(feature) => {
                    let enabled = parent
                        .feature_flag(feature.as_ref())
                        .unwrap_or_else(|| parent.is_enabled(feature.as_ref()));
                    registry.set_feature(feature, enabled);
                }
                None => {
                    registry.register_parent_provider(instance, parent, default_contracts, lookup)?;
                }
            }
            uninstantiated.retain(|known| *known != class);
        }

        for class in uninstantiated {
            debug!(provider = class.name(), "Instantiating provider known only by class");
            let provider = create_provider(&class)?;
            registry.register_parent_provider(provider, parent, default_contracts, lookup)?;
        }

        Ok(registry)
    }

    fn register_parent_provider(
        &mut self,
        provider: Arc<dyn Component>,
        parent: &dyn Configuration,
        default_contracts: &[TypeKey],
        lookup: &dyn BindingPriorityLookup,
    ) -> Result<()> {
        let class = provider.class();
        match parent.explicit_contracts(class.key()) {
            Some(contracts) => {
                *self.provider_contracts_mut(provider) = contracts;
            }
            None => {
                let priority = lookup.binding_priority(&class);
                debug!(
                    provider = class.name(),
                    priority, "Binding inherited provider to default contracts"
                );
                self.register_with_priority(
                    Registration::Instance(provider),
                    priority,
                    default_contracts,
                )?;
            }
        }
        Ok(())
    }

    /// Set a property
    ///
    /// An empty name, `None` and `Some(Value::Null)` all remove the entry, so
    /// a `null` value is never stored. Any other value is upserted.
    pub fn set_property(&mut self, name: &str, value: Option<Value>) {
        match value {
            Some(value) if !name.is_empty() && !value.is_null() => {
                self.properties.insert(name.to_string(), value);
            }
            _ => {
                self.properties.remove(name);
            }
        }
    }

    /// Remove a property, returning its previous value
    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    /// Register `feature` or update its enabled flag
    pub fn set_feature(&mut self, feature: Arc<dyn Feature>, enabled: bool) {
        let existing = self
            .features
            .iter_mut()
            .find(|entry| entry.feature.eq_component(as_component(feature.as_ref())));
        match existing {
            Some(entry) => entry.enabled = enabled,
            None => self.features.push(FeatureEntry { feature, enabled }),
        }
    }

    /// Register a provider binding every contract to the same priority
    pub fn register_with_priority(
        &mut self,
        registration: impl Into<Registration>,
        priority: i32,
        contracts: &[TypeKey],
    ) -> Result<bool> {
        self.register(registration, &init_contracts_map(priority, contracts))
    }

    /// Register a provider with per-contract priorities
    ///
    /// Returns `Ok(false)` without touching the registry when the class or
    /// the instance is already registered. Contracts the provider's class is
    /// not assignable to are dropped.
    pub fn register(
        &mut self,
        registration: impl Into<Registration>,
        contracts: &ContractMap,
    ) -> Result<bool> {
        let provider = match registration.into() {
            Registration::Class(class) => {
                if self.is_registered_class(class.key()) {
                    warn!(
                        provider = class.name(),
                        "Provider class has already been registered"
                    );
                    return Ok(false);
                }
                create_provider(&class)?
            }
            Registration::Instance(instance) => instance,
        };

        let class = provider.class();
        if self.is_registered(provider.as_ref()) {
            warn!(provider = class.name(), "Provider has already been registered");
            return Ok(false);
        }

        let metadata = self.provider_contracts_mut(provider);
        for (contract, priority) in contracts {
            if class.is_assignable_to(*contract) {
                metadata.insert(*contract, *priority);
            } else {
                debug!(
                    provider = class.name(),
                    contract = contract.name(),
                    "Dropping contract the provider does not implement"
                );
            }
        }
        debug!(
            provider = class.name(),
            contracts = metadata.len(),
            "Provider registered"
        );
        Ok(true)
    }

    fn provider_contracts_mut(&mut self, provider: Arc<dyn Component>) -> &mut ContractMap {
        let index = match self
            .providers
            .iter()
            .position(|entry| entry.instance.eq_component(provider.as_ref()))
        {
            Some(index) => index,
            None => {
                self.providers.push(ProviderEntry {
                    instance: provider,
                    contracts: ContractMap::new(),
                });
                self.providers.len() - 1
            }
        };
        &mut self.providers[index].contracts
    }
}

fn as_component(feature: &dyn Feature) -> &dyn Component {
    feature
}

impl Configuration for ConfigurationRegistry {
    fn runtime_kind(&self) -> RuntimeKind {
        self.runtime_kind
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn classes(&self) -> Vec<ProviderClass> {
        let mut classes: Vec<ProviderClass> = Vec::new();
        for instance in self.instances() {
            let class = instance.class();
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        classes
    }

    fn instances(&self) -> Vec<Arc<dyn Component>> {
        let features = self.features.iter().map(|entry| {
            let feature: Arc<dyn Component> = entry.feature.clone();
            feature
        });
        let mut instances: Vec<Arc<dyn Component>> =
            Vec::with_capacity(self.providers.len() + self.features.len());
        for candidate in self
            .providers
            .iter()
            .map(|entry| Arc::clone(&entry.instance))
            .chain(features)
        {
            if !instances
                .iter()
                .any(|seen| seen.eq_component(candidate.as_ref()))
            {
                instances.push(candidate);
            }
        }
        instances
    }

    fn contracts(&self, target: TypeKey) -> ContractMap {
        // Features carry no contract metadata.
        self.explicit_contracts(target).unwrap_or_default()
    }

    fn explicit_contracts(&self, target: TypeKey) -> Option<ContractMap> {
        self.providers
            .iter()
            .find(|entry| entry.instance.class().is_assignable_to(target))
            .map(|entry| entry.contracts.clone())
    }

    fn is_enabled(&self, feature: &dyn Feature) -> bool {
        self.feature_flag(feature).is_some()
    }

    fn is_enabled_class(&self, class: &ProviderClass) -> bool {
        self.features
            .iter()
            .any(|entry| entry.feature.class().is_assignable_from(class))
    }

    fn feature_flag(&self, feature: &dyn Feature) -> Option<bool> {
        self.features
            .iter()
            .find(|entry| entry.feature.eq_component(as_component(feature)))
            .map(|entry| entry.enabled)
    }

    fn is_registered(&self, component: &dyn Component) -> bool {
        self.providers
            .iter()
            .any(|entry| entry.instance.eq_component(component))
            || self
                .features
                .iter()
                .any(|entry| entry.feature.eq_component(component))
    }

    fn is_registered_class(&self, key: TypeKey) -> bool {
        self.providers
            .iter()
            .any(|entry| entry.instance.class().key() == key)
            || self
                .features
                .iter()
                .any(|entry| entry.feature.class().key() == key)
    }
}

impl std::fmt::Debug for ConfigurationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationRegistry")
            .field("runtime_kind", &self.runtime_kind)
            .field("properties", &self.properties.len())
            .field("providers", &self.providers.len())
            .field("features", &self.features.len())
            .finish()
    }
}
