//! # Polymorphic Root Resolution
//!
//! Finds the type a concrete bean must be decoded *as*: the ancestor that
//! carries the family's discriminator metadata.
//!
//! ## Walk
//!
//! Starting at the concrete type and following parent pointers, every type
//! that declares its own discriminator becomes the current candidate. The
//! concrete type itself need not be self-discriminated (family leaves usually
//! are not), but above it the first ancestor without its own discriminator
//! ends the walk. The result is the last candidate, or the concrete type when
//! no candidate was seen.
//!
//! Intermediate abstract types may redeclare the discriminator, so the walk
//! continues past them: for `Root(disc) <- Mid(disc) <- Leaf` the root of
//! `Leaf` is `Root`, not `Mid`. Which type is returned decides the
//! deserialization target for the whole family, so this rule is pinned by
//! tests.

use std::collections::BTreeSet;

use crate::descriptor::BeanDescriptor;
use crate::error::BeanError;
use crate::registry::BeanRegistry;

/// Resolve the polymorphic root of `concrete`.
///
/// # Errors
///
/// - [`BeanError::UnknownType`] if `concrete` is not registered.
/// - [`BeanError::DanglingParent`] if the walk reaches an unregistered parent.
/// - [`BeanError::CyclicHierarchy`] if the walk revisits a type.
pub fn resolve_root<'r>(
    registry: &'r BeanRegistry,
    concrete: &str,
) -> Result<&'r BeanDescriptor, BeanError> {
    let leaf = registry.descriptor(concrete)?;
    let mut root = leaf;
    let mut current = leaf;
    let mut seen = BTreeSet::from([leaf.name]);

    while let Some(parent_name) = current.parent {
        let parent = registry
            .descriptor(parent_name)
            .map_err(|_| BeanError::DanglingParent {
                child: current.name.to_string(),
                parent: parent_name.to_string(),
            })?;
        if !seen.insert(parent.name) {
            return Err(BeanError::CyclicHierarchy(leaf.name.to_string()));
        }
        if !parent.has_own_discriminator() {
            break;
        }
        root = parent;
        current = parent;
    }

    if root.name != leaf.name {
        tracing::debug!(bean = leaf.name, root = root.name, "resolved polymorphic root");
    }
    Ok(root)
}
