//! Configured binding priorities
//!
//! Priority overrides keyed by catalog name, resolved once to type keys.

use std::collections::{BTreeMap, HashMap};

use cfgreg_application::catalog::resolve_provider_class;
use cfgreg_domain::error::Result;
use cfgreg_domain::ports::{BindingPriorityLookup, DeclaredPriority};
use cfgreg_domain::value_objects::{ProviderClass, TypeKey};

/// Priority table from `[registry.priorities]`
///
/// Classes without an entry use their declared priority, then
/// [`cfgreg_domain::constants::PRIORITY_USER`].
#[derive(Debug, Clone, Default)]
pub struct ConfiguredPriorities {
    overrides: HashMap<TypeKey, i32>,
}

impl ConfiguredPriorities {
    /// Resolve every class name in `priorities`
    pub fn resolve(priorities: &BTreeMap<String, i32>) -> Result<Self> {
        let mut overrides = HashMap::with_capacity(priorities.len());
        for (name, priority) in priorities {
            let class = resolve_provider_class(name)?;
            overrides.insert(class.key(), *priority);
        }
        Ok(Self { overrides })
    }

    /// Override for `key`, if configured
    pub fn get(&self, key: TypeKey) -> Option<i32> {
        self.overrides.get(&key).copied()
    }

    /// Number of configured overrides
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether no override is configured
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl BindingPriorityLookup for ConfiguredPriorities {
    fn binding_priority(&self, class: &ProviderClass) -> i32 {
        self.get(class.key())
            .unwrap_or_else(|| DeclaredPriority.binding_priority(class))
    }
}
