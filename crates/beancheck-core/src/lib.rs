//! # beancheck-core — Bean Metadata and Hierarchy
//!
//! Defines what a *bean* is to the contract-testing stack: an immutable value
//! type that crosses a serialization boundary, together with an explicit
//! metadata description of its properties, its constructor, and its place in
//! a polymorphic family.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit metadata, no reflection.** Every bean publishes a
//!    [`BeanDescriptor`] through the [`Bean`] trait. Property mutability,
//!    mutators, constructor parameters and the parent pointer are declared,
//!    not discovered.
//!
//! 2. **Registration table instead of classpath scanning.** Beans are entered
//!    into a [`BeanRegistry`] at suite initialization. "No beans found" is an
//!    emptiness check on an explicit collection.
//!
//! 3. **Polymorphic roots by metadata walk.** [`resolve_root`] walks parent
//!    pointers to the outermost ancestor in the contiguous run of
//!    self-discriminated types, which is the deserialization target for the
//!    whole family.
//!
//! ## Crate Policy
//!
//! - Depends only on `beancheck-synth` internally.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bean;
pub mod descriptor;
pub mod error;
pub mod introspect;
pub mod registry;
pub mod resolve;

// Re-export primary types for ergonomic imports.
pub use bean::{Bean, DynBean};
pub use descriptor::{
    BeanDescriptor, BeanKind, ConstructorParam, Discriminator, PropertyDescriptor, Storage,
};
pub use error::BeanError;
pub use introspect::{describe, PropertyReport, TypeDescription};
pub use registry::{BeanCodec, BeanRegistry, DecodeFn, RegisteredBean, SynthesizeFn};
pub use resolve::resolve_root;

pub use beancheck_synth::{Synthesize, Synthesizer};
