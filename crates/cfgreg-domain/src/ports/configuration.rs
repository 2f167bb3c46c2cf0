//! Read-only configuration port
//!
//! The view a registry exposes to its consumers, and the view a child
//! registry inherits from.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::component::{Component, Feature};
use crate::value_objects::{ContractMap, ProviderClass, RuntimeKind, TypeKey};

/// Named property values
pub type Properties = HashMap<String, Value>;

/// Read view over properties, providers and features
pub trait Configuration {
    /// Runtime kind fixed at construction
    fn runtime_kind(&self) -> RuntimeKind;

    /// All properties
    fn properties(&self) -> &Properties;

    /// Single property value, `None` when unset
    fn property(&self, name: &str) -> Option<&Value> {
        self.properties().get(name)
    }

    /// Names of all set properties
    fn property_names(&self) -> Vec<&str> {
        self.properties().keys().map(String::as_str).collect()
    }

    /// Classes known to the configuration, without duplicates
    ///
    /// May include classes that have no instance yet.
    fn classes(&self) -> Vec<ProviderClass>;

    /// Registered providers and features, without duplicates
    fn instances(&self) -> Vec<Arc<dyn Component>>;

    /// Contract metadata of the first instance assignable to `target`
    ///
    /// Empty when no instance matches or the match carries no metadata.
    fn contracts(&self, target: TypeKey) -> ContractMap;

    /// Contract metadata the configuration holds for `target`
    ///
    /// `Some` when a registered instance matches, even with an empty map;
    /// `None` when nothing matches or the configuration keeps no metadata.
    /// The default treats an empty [`Configuration::contracts`] as `None`.
    fn explicit_contracts(&self, target: TypeKey) -> Option<ContractMap> {
        let contracts = self.contracts(target);
        (!contracts.is_empty()).then_some(contracts)
    }

    /// Whether an equal feature is registered; the enabled flag is ignored
    fn is_enabled(&self, feature: &dyn Feature) -> bool;

    /// Whether some registered feature's class is assignable from `class`
    fn is_enabled_class(&self, class: &ProviderClass) -> bool;

    /// Stored enabled flag of a registered feature
    ///
    /// Defaults to presence, for configurations that keep no flags.
    fn feature_flag(&self, feature: &dyn Feature) -> Option<bool> {
        self.is_enabled(feature).then_some(true)
    }

    /// Whether a structurally equal instance is registered
    fn is_registered(&self, component: &dyn Component) -> bool {
        self.instances()
            .iter()
            .any(|instance| instance.eq_component(component))
    }

    /// Whether an instance of exactly this type is registered
    fn is_registered_class(&self, key: TypeKey) -> bool {
        self.instances()
            .iter()
            .any(|instance| instance.class().key() == key)
    }
}
