//! # Error Types — Registry and Metadata Errors
//!
//! Errors raised while building the registration table or walking a type
//! hierarchy. These are configuration defects in the suite setup, distinct
//! from the contract violations a bean can exhibit.

use thiserror::Error;

/// Metadata or registration failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeanError {
    /// A type name was looked up but never registered.
    #[error("unknown bean type: {0}")]
    UnknownType(String),

    /// The same type name was registered twice.
    #[error("bean type registered twice: {0}")]
    DuplicateType(String),

    /// A parent pointer names a type missing from the registry.
    #[error("bean type {child} extends unregistered type {parent}")]
    DanglingParent {
        /// The type declaring the parent.
        child: String,
        /// The unresolved parent name.
        parent: String,
    },

    /// Walking parent pointers revisited a type.
    #[error("cyclic bean hierarchy through {0}")]
    CyclicHierarchy(String),

    /// A descriptor's name disagrees with the Rust type it was registered for.
    #[error("descriptor for {expected} is named {actual}")]
    DescriptorName {
        /// `std::any::type_name` of the registered type.
        expected: String,
        /// Name carried by the descriptor.
        actual: String,
    },

    /// A concrete descriptor was declared without codec hooks.
    #[error("concrete bean type {0} declared without a codec; register it with register::<T>()")]
    MissingCodec(String),

    /// An abstract type was asked for an instance.
    #[error("bean type {0} is abstract and cannot be instantiated")]
    NotInstantiable(String),
}
