//! Registration target: an instance or a class reference

use std::sync::Arc;

use cfgreg_domain::ports::Component;
use cfgreg_domain::value_objects::ProviderClass;

/// What is handed to [`ConfigurationRegistry::register`]
///
/// [`ConfigurationRegistry::register`]: super::ConfigurationRegistry::register
#[derive(Debug, Clone)]
pub enum Registration {
    /// An already constructed provider
    Instance(Arc<dyn Component>),
    /// A class reference, instantiated through its constructor on registration
    Class(ProviderClass),
}

impl Registration {
    /// Wrap a provider value
    pub fn instance<T: Component>(provider: T) -> Self {
        Self::Instance(Arc::new(provider))
    }

    /// Wrap a class reference
    pub fn class(class: ProviderClass) -> Self {
        Self::Class(class)
    }
}

impl From<Arc<dyn Component>> for Registration {
    fn from(provider: Arc<dyn Component>) -> Self {
        Self::Instance(provider)
    }
}

impl From<ProviderClass> for Registration {
    fn from(class: ProviderClass) -> Self {
        Self::Class(class)
    }
}
