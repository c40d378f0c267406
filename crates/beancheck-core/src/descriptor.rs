//! # Bean Descriptors — Explicit Type Metadata
//!
//! A [`BeanDescriptor`] is the statically declared shape of a bean: the
//! properties its serializer emits, the parameters of its all-fields
//! constructor, whether it can be instantiated, its parent in a polymorphic
//! family, and whether it carries its own discriminator.
//!
//! Descriptors are built with a small by-value builder:
//!
//! ```
//! use beancheck_core::{BeanDescriptor, PropertyDescriptor};
//!
//! struct Circle { radius: f64 }
//!
//! let descriptor = BeanDescriptor::concrete::<Circle>()
//!     .extends("shapes::Shape")
//!     .property(PropertyDescriptor::of::<f64>("radius"))
//!     .record();
//! assert_eq!(descriptor.type_tag(), "Circle");
//! assert_eq!(descriptor.constructor.len(), 1);
//! ```

/// Whether a bean type can be instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeanKind {
    /// A concrete type with synthesis and decode hooks.
    Concrete,
    /// A family root or intermediate type with no instances of its own.
    Abstract,
}

/// Mutability of a property's backing storage.
///
/// `Mutable` marks storage that can change behind a shared reference
/// (`Cell`, `RefCell`, atomics, locks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Storage {
    /// Plain owned field.
    Immutable,
    /// Interior-mutable field.
    Mutable,
}

/// Discriminated-union metadata declared directly on a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Discriminator {
    /// Name of the payload property holding the subtype tag.
    pub property: &'static str,
}

/// One serialized property of a bean.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
    /// Property name as emitted on the wire.
    pub name: &'static str,
    /// Declared Rust type.
    pub type_name: &'static str,
    /// Name of a mutator method (`set_x`, `x_mut`), if one exists.
    pub mutator: Option<&'static str>,
    /// Backing storage mutability.
    pub storage: Storage,
}

impl PropertyDescriptor {
    /// An immutable property of type `T` with no mutator.
    pub fn of<T: ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            type_name: std::any::type_name::<T>(),
            mutator: None,
            storage: Storage::Immutable,
        }
    }

    /// Declare a mutator method for this property.
    pub fn with_mutator(mut self, method: &'static str) -> Self {
        self.mutator = Some(method);
        self
    }

    /// Declare interior-mutable backing storage.
    pub fn mutable(mut self) -> Self {
        self.storage = Storage::Mutable;
        self
    }
}

/// One parameter of a bean's constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructorParam {
    /// Parameter name.
    pub name: &'static str,
    /// Declared Rust type.
    pub type_name: &'static str,
}

impl ConstructorParam {
    /// A parameter of type `T`.
    pub fn of<T: ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl From<&PropertyDescriptor> for ConstructorParam {
    fn from(property: &PropertyDescriptor) -> Self {
        Self {
            name: property.name,
            type_name: property.type_name,
        }
    }
}

/// Static metadata for one bean type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanDescriptor {
    /// Fully-qualified type name; also the test case label.
    pub name: &'static str,
    /// Concrete or abstract.
    pub kind: BeanKind,
    /// Fully-qualified name of the parent type, if any.
    pub parent: Option<&'static str>,
    /// Discriminator metadata declared on this type itself (never inherited).
    pub discriminator: Option<Discriminator>,
    /// Explicit subtype tag; defaults to the simple type name.
    pub tag: Option<&'static str>,
    /// Serialized properties, in declaration order.
    pub properties: Vec<PropertyDescriptor>,
    /// Constructor parameters, in order.
    pub constructor: Vec<ConstructorParam>,
}

impl BeanDescriptor {
    /// Descriptor for the concrete Rust type `T`, named by `std::any::type_name`.
    pub fn concrete<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>(), BeanKind::Concrete)
    }

    /// Descriptor for an abstract type that exists only as metadata.
    pub fn abstract_type(name: &'static str) -> Self {
        Self::named(name, BeanKind::Abstract)
    }

    /// Descriptor with an explicit name and kind.
    pub fn named(name: &'static str, kind: BeanKind) -> Self {
        Self {
            name,
            kind,
            parent: None,
            discriminator: None,
            tag: None,
            properties: Vec::new(),
            constructor: Vec::new(),
        }
    }

    /// Set the parent type.
    pub fn extends(mut self, parent: &'static str) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Declare discriminator metadata on this type.
    pub fn discriminated_by(mut self, property: &'static str) -> Self {
        self.discriminator = Some(Discriminator { property });
        self
    }

    /// Override the subtype tag written into payloads.
    pub fn tagged(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Append a property.
    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Replace the constructor signature.
    pub fn constructor(mut self, params: Vec<ConstructorParam>) -> Self {
        self.constructor = params;
        self
    }

    /// Constructor signature mirroring the declared properties, for beans
    /// whose constructor takes every field in order.
    pub fn record(mut self) -> Self {
        self.constructor = self.properties.iter().map(ConstructorParam::from).collect();
        self
    }

    /// Whether discriminator metadata is declared on this type itself.
    pub fn has_own_discriminator(&self) -> bool {
        self.discriminator.is_some()
    }

    /// Whether instances of this type can exist.
    pub fn is_instantiable(&self) -> bool {
        self.kind == BeanKind::Concrete
    }

    /// Last path segment of the name, with generic arguments stripped.
    pub fn simple_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Tag identifying this type inside its family's payloads.
    pub fn type_tag(&self) -> &'static str {
        self.tag.unwrap_or_else(|| self.simple_name())
    }

    /// Look up a property by name.
    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }
}
