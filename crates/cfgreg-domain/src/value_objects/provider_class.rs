//! Runtime descriptor of a concrete component type
//!
//! A `ProviderClass` is what a class reference resolves to: the type's key,
//! the contracts (and any other types) it can be assigned to, an optional
//! declared binding priority and an optional no-argument constructor.
//!
//! ```ignore
//! let class = ProviderClass::of::<GzipCodec>()
//!     .implements::<dyn ReaderInterceptor>()
//!     .implements::<dyn WriterInterceptor>()
//!     .with_priority(PRIORITY_ENTITY_CODER)
//!     .default_constructible::<GzipCodec>();
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::type_key::TypeKey;
use crate::error::BoxError;
use crate::ports::component::Component;

/// No-argument provider constructor
pub type Constructor = fn() -> Result<Arc<dyn Component>, BoxError>;

/// Class reference for a registrable component type
///
/// Equality and hashing are by type key only.
#[derive(Clone)]
pub struct ProviderClass {
    key: TypeKey,
    assignable_to: Vec<TypeKey>,
    declared_priority: Option<i32>,
    constructor: Option<Constructor>,
}

fn construct_default<T: Component + Default>() -> Result<Arc<dyn Component>, BoxError> {
    Ok(Arc::new(T::default()))
}

impl ProviderClass {
    /// Describe `T` with no contracts, no declared priority and no constructor
    pub fn of<T: 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            assignable_to: Vec::new(),
            declared_priority: None,
            constructor: None,
        }
    }

    /// Declare that the class implements contract `C` (usually `dyn Trait`)
    pub fn implements<C: ?Sized + 'static>(self) -> Self {
        self.extends(TypeKey::of::<C>())
    }

    /// Declare an arbitrary supertype key
    ///
    /// The list is not transitive: a class must name every type it can be
    /// assigned to.
    pub fn extends(mut self, key: TypeKey) -> Self {
        if key != self.key && !self.assignable_to.contains(&key) {
            self.assignable_to.push(key);
        }
        self
    }

    /// Declare the class's own binding priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.declared_priority = Some(priority);
        self
    }

    /// Attach a no-argument constructor
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Attach `T::default` as the constructor
    pub fn default_constructible<T: Component + Default>(self) -> Self {
        self.with_constructor(construct_default::<T>)
    }

    /// Type key of the concrete class
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    /// Types other than itself this class is assignable to
    pub fn contracts(&self) -> &[TypeKey] {
        &self.assignable_to
    }

    /// Priority the class declares for itself, if any
    pub fn declared_priority(&self) -> Option<i32> {
        self.declared_priority
    }

    /// No-argument constructor, if the class has one
    pub fn constructor(&self) -> Option<Constructor> {
        self.constructor
    }

    /// Whether an instance of this class satisfies `target`
    pub fn is_assignable_to(&self, target: TypeKey) -> bool {
        self.key == target || self.assignable_to.contains(&target)
    }

    /// Whether an instance of `other` satisfies this class
    pub fn is_assignable_from(&self, other: &ProviderClass) -> bool {
        other.is_assignable_to(self.key)
    }
}

impl PartialEq for ProviderClass {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ProviderClass {}

impl Hash for ProviderClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for ProviderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderClass")
            .field("name", &self.key.name())
            .field(
                "contracts",
                &self
                    .assignable_to
                    .iter()
                    .map(TypeKey::short_name)
                    .collect::<Vec<_>>(),
            )
            .field("declared_priority", &self.declared_priority)
            .field("constructible", &self.constructor.is_some())
            .finish()
    }
}
