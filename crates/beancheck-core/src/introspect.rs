//! # Structural Introspector
//!
//! Derives the per-property structural facts the immutability and
//! constructor-coverage checks assert on. Pure metadata: no instance is
//! built and nothing is serialized.

use crate::descriptor::{BeanDescriptor, Storage};

/// Structural facts about one serialized property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyReport {
    /// Property name.
    pub name: &'static str,
    /// Declared type.
    pub type_name: &'static str,
    /// Mutator method, if any.
    pub mutator: Option<&'static str>,
    /// Whether the constructor has a parameter with this name and type.
    pub constructor_param: bool,
    /// Backing storage mutability.
    pub storage: Storage,
}

impl PropertyReport {
    /// Whether a mutator exists.
    pub fn has_mutator(&self) -> bool {
        self.mutator.is_some()
    }

    /// Whether the backing storage is immutable.
    pub fn is_immutable(&self) -> bool {
        self.storage == Storage::Immutable
    }
}

/// Introspection result for one bean type, computed once and shared by the
/// structural checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescription {
    /// Fully-qualified type name.
    pub name: &'static str,
    /// One report per serialized property, in declaration order.
    pub properties: Vec<PropertyReport>,
}

impl TypeDescription {
    /// Properties with no matching constructor parameter.
    pub fn missing_constructor_params(&self) -> impl Iterator<Item = &PropertyReport> {
        self.properties.iter().filter(|p| !p.constructor_param)
    }

    /// Properties exposing a mutator.
    pub fn with_mutators(&self) -> impl Iterator<Item = &PropertyReport> {
        self.properties.iter().filter(|p| p.has_mutator())
    }

    /// Properties backed by mutable storage.
    pub fn with_mutable_storage(&self) -> impl Iterator<Item = &PropertyReport> {
        self.properties.iter().filter(|p| !p.is_immutable())
    }
}

/// Describe the serialized properties of `descriptor`.
pub fn describe(descriptor: &BeanDescriptor) -> TypeDescription {
    let properties = descriptor
        .properties
        .iter()
        .map(|property| PropertyReport {
            name: property.name,
            type_name: property.type_name,
            mutator: property.mutator,
            constructor_param: descriptor
                .constructor
                .iter()
                .any(|param| param.name == property.name && param.type_name == property.type_name),
            storage: property.storage,
        })
        .collect();
    TypeDescription {
        name: descriptor.name,
        properties,
    }
}
