//! Unit tests for the component model and priority lookups

use std::sync::Arc;

use cfgreg_domain::constants::PRIORITY_USER;
use cfgreg_domain::{
    BindingPriorityLookup, Component, DeclaredPriority, Feature, ProviderClass, component_eq,
};

#[derive(Debug, PartialEq)]
struct Timeout(u32);

impl Component for Timeout {
    fn class(&self) -> ProviderClass {
        ProviderClass::of::<Timeout>()
    }

    fn eq_component(&self, other: &dyn Component) -> bool {
        component_eq(self, other)
    }
}

#[derive(Debug, PartialEq)]
struct Tracing;

impl Component for Tracing {
    fn class(&self) -> ProviderClass {
        ProviderClass::of::<Tracing>().with_priority(42)
    }

    fn eq_component(&self, other: &dyn Component) -> bool {
        component_eq(self, other)
    }

    fn into_feature(self: Arc<Self>) -> Option<Arc<dyn Feature>> {
        Some(self)
    }
}

impl Feature for Tracing {}

#[test]
fn test_structural_equality() {
    let a: Arc<dyn Component> = Arc::new(Timeout(30));
    assert!(a.eq_component(&Timeout(30)));
    assert!(!a.eq_component(&Timeout(60)));
    assert!(!a.eq_component(&Tracing));
}

#[test]
fn test_into_feature() {
    let provider: Arc<dyn Component> = Arc::new(Timeout(30));
    assert!(provider.into_feature().is_none());

    let feature: Arc<dyn Component> = Arc::new(Tracing);
    assert!(feature.into_feature().is_some());
}

#[test]
fn test_declared_priority_lookup() {
    assert_eq!(DeclaredPriority.binding_priority(&Tracing.class()), 42);
    assert_eq!(
        DeclaredPriority.binding_priority(&Timeout(1).class()),
        PRIORITY_USER
    );
}

#[test]
fn test_closure_lookup() {
    let lookup = |class: &ProviderClass| class.contracts().len() as i32;
    assert_eq!(lookup.binding_priority(&Timeout(1).class()), 0);
}
