//! # Bean Registry — Explicit Registration Table
//!
//! Every bean type is entered into a [`BeanRegistry`] at suite
//! initialization. Concrete types register through [`BeanRegistry::register`],
//! which captures type-erased synthesis and decode hooks alongside the
//! descriptor; abstract family members are declared descriptor-only.
//!
//! Entries are keyed by fully-qualified name in a `BTreeMap`, so enumeration
//! order is stable across runs.

use std::collections::{BTreeMap, BTreeSet};

use beancheck_synth::Synthesizer;

use crate::bean::{Bean, DynBean};
use crate::descriptor::BeanDescriptor;
use crate::error::BeanError;

/// Erased synthesis hook.
pub type SynthesizeFn = fn(&mut Synthesizer) -> Box<dyn DynBean>;

/// Erased decode hook from the format-neutral value tree.
pub type DecodeFn = fn(serde_json::Value) -> Result<Box<dyn DynBean>, serde_json::Error>;

/// Type-erased constructors for one concrete bean type.
#[derive(Debug, Clone, Copy)]
pub struct BeanCodec {
    /// Produce a random instance.
    pub synthesize: SynthesizeFn,
    /// Rebuild an instance from a value tree.
    pub decode: DecodeFn,
}

impl BeanCodec {
    /// Hooks for the bean type `T`.
    pub fn of<T: Bean>() -> Self {
        Self {
            synthesize: synthesize_erased::<T>,
            decode: decode_erased::<T>,
        }
    }
}

fn synthesize_erased<T: Bean>(synth: &mut Synthesizer) -> Box<dyn DynBean> {
    Box::new(synth.generate::<T>())
}

fn decode_erased<T: Bean>(value: serde_json::Value) -> Result<Box<dyn DynBean>, serde_json::Error> {
    let bean: T = serde_json::from_value(value)?;
    Ok(Box::new(bean))
}

/// A registry entry.
#[derive(Debug, Clone)]
pub struct RegisteredBean {
    /// Static metadata.
    pub descriptor: BeanDescriptor,
    /// Hooks; `None` exactly when the type is abstract.
    pub codec: Option<BeanCodec>,
}

impl RegisteredBean {
    /// Fully-qualified name.
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Hooks for an instantiable type.
    pub fn codec(&self) -> Result<BeanCodec, BeanError> {
        self.codec
            .ok_or_else(|| BeanError::NotInstantiable(self.descriptor.name.to_string()))
    }
}

/// The central table of bean types under test.
#[derive(Debug, Clone, Default)]
pub struct BeanRegistry {
    entries: BTreeMap<&'static str, RegisteredBean>,
}

impl BeanRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the concrete bean type `T`.
    ///
    /// # Errors
    ///
    /// - [`BeanError::DescriptorName`] if `T::descriptor()` is not named after `T`.
    /// - [`BeanError::DuplicateType`] if `T` is already registered.
    pub fn register<T: Bean>(&mut self) -> Result<&mut Self, BeanError> {
        let descriptor = T::descriptor();
        let expected = std::any::type_name::<T>();
        if descriptor.name != expected {
            return Err(BeanError::DescriptorName {
                expected: expected.to_string(),
                actual: descriptor.name.to_string(),
            });
        }
        self.insert(RegisteredBean {
            descriptor,
            codec: Some(BeanCodec::of::<T>()),
        })
    }

    /// Declare an abstract family member.
    ///
    /// # Errors
    ///
    /// - [`BeanError::MissingCodec`] if the descriptor is concrete.
    /// - [`BeanError::DuplicateType`] if the name is already registered.
    pub fn declare(&mut self, descriptor: BeanDescriptor) -> Result<&mut Self, BeanError> {
        if descriptor.is_instantiable() {
            return Err(BeanError::MissingCodec(descriptor.name.to_string()));
        }
        self.insert(RegisteredBean {
            descriptor,
            codec: None,
        })
    }

    fn insert(&mut self, entry: RegisteredBean) -> Result<&mut Self, BeanError> {
        let name = entry.descriptor.name;
        if self.entries.contains_key(name) {
            return Err(BeanError::DuplicateType(name.to_string()));
        }
        tracing::trace!(bean = name, abstract_type = entry.codec.is_none(), "registered bean type");
        self.entries.insert(name, entry);
        Ok(self)
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredBean> {
        self.entries.get(name)
    }

    /// Look up a descriptor by name.
    pub fn descriptor(&self, name: &str) -> Result<&BeanDescriptor, BeanError> {
        self.get(name)
            .map(|entry| &entry.descriptor)
            .ok_or_else(|| BeanError::UnknownType(name.to_string()))
    }

    /// Whether `name` carries its own (non-inherited) discriminator metadata.
    pub fn has_own_discriminator(&self, name: &str) -> Result<bool, BeanError> {
        Ok(self.descriptor(name)?.has_own_discriminator())
    }

    /// All registered types whose name starts with `namespace` (every type
    /// when `None`), in name order. Abstract types are included.
    pub fn subtypes_of(&self, namespace: Option<&str>) -> Vec<&RegisteredBean> {
        self.entries
            .values()
            .filter(|entry| namespace.map_or(true, |ns| entry.descriptor.name.starts_with(ns)))
            .collect()
    }

    /// Check that every parent pointer resolves and no hierarchy is cyclic.
    pub fn validate(&self) -> Result<(), BeanError> {
        for entry in self.entries.values() {
            let mut seen = BTreeSet::new();
            let mut current = &entry.descriptor;
            seen.insert(current.name);
            while let Some(parent) = current.parent {
                let next = self.descriptor(parent).map_err(|_| BeanError::DanglingParent {
                    child: current.name.to_string(),
                    parent: parent.to_string(),
                })?;
                if !seen.insert(next.name) {
                    return Err(BeanError::CyclicHierarchy(entry.descriptor.name.to_string()));
                }
                current = next;
            }
        }
        Ok(())
    }

    /// Number of registered types, abstract ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
