//! Binding priority lookup port
//!
//! Supplies the priority an inherited provider is bound with when its parent
//! holds no explicit contract metadata for it.

use crate::constants::PRIORITY_USER;
use crate::value_objects::ProviderClass;

/// Provider class to default binding priority
pub trait BindingPriorityLookup {
    /// Priority to bind `class` with
    fn binding_priority(&self, class: &ProviderClass) -> i32;
}

impl<F> BindingPriorityLookup for F
where
    F: Fn(&ProviderClass) -> i32,
{
    fn binding_priority(&self, class: &ProviderClass) -> i32 {
        self(class)
    }
}

/// Uses the class's declared priority, falling back to [`PRIORITY_USER`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredPriority;

impl BindingPriorityLookup for DeclaredPriority {
    fn binding_priority(&self, class: &ProviderClass) -> i32 {
        class.declared_priority().unwrap_or(PRIORITY_USER)
    }
}
