//! Type identity used as a contract and class key

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Contract type to binding priority
pub type ContractMap = HashMap<TypeKey, i32>;

/// Identity of a Rust type
///
/// Contracts are keyed by the trait object type (`TypeKey::of::<dyn Codec>()`),
/// concrete classes by the implementing type. Equality and hashing use the
/// `TypeId` only; the name is carried for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for `T`, which may be a trait object type
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Underlying `TypeId`
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name as reported by the compiler
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name (`dyn a::b::Codec` -> `Codec`)
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
