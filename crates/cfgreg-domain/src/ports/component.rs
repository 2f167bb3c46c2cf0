//! Registrable component model
//!
//! Everything a registry holds is a [`Component`]: plain providers and
//! [`Feature`]s alike. Components are compared structurally through
//! [`Component::eq_component`], usually implemented with [`component_eq`].

use std::fmt;
use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::value_objects::ProviderClass;

/// An object that can be registered as a provider or feature
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cfgreg_domain::ports::{Component, component_eq};
/// use cfgreg_domain::value_objects::ProviderClass;
///
/// trait Codec {}
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Gzip;
///
/// impl Codec for Gzip {}
///
/// impl Component for Gzip {
///     fn class(&self) -> ProviderClass {
///         ProviderClass::of::<Gzip>()
///             .implements::<dyn Codec>()
///             .default_constructible::<Gzip>()
///     }
///
///     fn eq_component(&self, other: &dyn Component) -> bool {
///         component_eq(self, other)
///     }
/// }
///
/// let gzip: Arc<dyn Component> = Arc::new(Gzip);
/// assert!(gzip.eq_component(&Gzip));
/// ```
pub trait Component: DowncastSync + fmt::Debug {
    /// Class reference of the concrete type
    fn class(&self) -> ProviderClass;

    /// Structural equality against another registered component
    fn eq_component(&self, other: &dyn Component) -> bool;

    /// View this component as a feature, if it is one
    fn into_feature(self: Arc<Self>) -> Option<Arc<dyn Feature>> {
        None
    }
}

impl_downcast!(sync Component);

/// A component that toggles optional behaviour
///
/// # Requirements
///
/// Every implementor must also override [`Component::into_feature`] to
/// return `Some(self)`:
///
/// ```
/// # use std::sync::Arc;
/// # use cfgreg_domain::ports::{Component, Feature, component_eq};
/// # use cfgreg_domain::value_objects::ProviderClass;
/// #[derive(Debug, PartialEq)]
/// struct Metrics;
///
/// impl Component for Metrics {
///     fn class(&self) -> ProviderClass {
///         ProviderClass::of::<Metrics>()
///     }
///
///     fn eq_component(&self, other: &dyn Component) -> bool {
///         component_eq(self, other)
///     }
///
///     fn into_feature(self: Arc<Self>) -> Option<Arc<dyn Feature>> {
///         Some(self)
///     }
/// }
///
/// impl Feature for Metrics {}
/// ```
///
/// Registries only see `Arc<dyn Component>` when inheriting. A type that
/// keeps the default `None` is inherited as a plain provider: it is bound to
/// the default contracts and its enabled flag is lost.
pub trait Feature: Component {}

/// Structural equality helper for `PartialEq` components
///
/// True when `other` has the same concrete type as `this` and compares equal.
pub fn component_eq<T: Component + PartialEq>(this: &T, other: &dyn Component) -> bool {
    other.downcast_ref::<T>().is_some_and(|other| other == this)
}
