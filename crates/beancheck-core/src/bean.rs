//! # Bean Trait and Erased View
//!
//! [`Bean`] is the marker every contract-tested type implements. The suite
//! handles beans of many concrete types at once, so [`DynBean`] provides an
//! object-safe view: the type name, the intermediate value tree, and value
//! equality against another erased bean.

use std::any::Any;
use std::fmt::Debug;

use beancheck_synth::Synthesize;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::descriptor::BeanDescriptor;

/// An immutable value type that crosses a serialization boundary.
///
/// `PartialEq` is the value-equality contract used by the round-trip
/// verifier: two independently constructed instances with identical property
/// values must compare equal.
pub trait Bean: Serialize + DeserializeOwned + Synthesize + PartialEq + Debug + 'static {
    /// Static metadata for this type. The descriptor's name must be
    /// `std::any::type_name::<Self>()`, which [`BeanDescriptor::concrete`]
    /// provides.
    fn descriptor() -> BeanDescriptor;
}

/// Object-safe view of a [`Bean`].
pub trait DynBean: Debug {
    /// Fully-qualified name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Serialize into the format-neutral value tree.
    fn to_value(&self) -> Result<serde_json::Value, serde_json::Error>;

    /// Value equality; false when `other` has a different concrete type.
    fn dyn_eq(&self, other: &dyn DynBean) -> bool;

    /// Downcasting access.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Bean> DynBean for T {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn dyn_eq(&self, other: &dyn DynBean) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
