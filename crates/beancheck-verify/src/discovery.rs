//! # Type Discovery Driver
//!
//! Turns the registration table into test cases: one per instantiable bean,
//! paired with the polymorphic root it must be decoded as and labelled with
//! its fully-qualified name.

use beancheck_core::{resolve_root, BeanRegistry};

use crate::error::ContractViolation;

/// One bean under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanCase {
    /// Deserialization target.
    pub root: &'static str,
    /// Concrete type that is synthesized and encoded.
    pub concrete: &'static str,
    /// Report label: the concrete type's fully-qualified name.
    pub name: String,
}

impl BeanCase {
    /// Whether the bean decodes through a family root rather than itself.
    pub fn is_polymorphic(&self) -> bool {
        self.root != self.concrete
    }
}

/// Enumerate the concrete beans under `namespace` (every bean when `None`).
///
/// # Errors
///
/// - [`ContractViolation::Metadata`] if the registry's hierarchy is broken.
/// - [`ContractViolation::NoBeansDiscovered`] if no concrete bean matches.
pub fn discover(
    registry: &BeanRegistry,
    namespace: Option<&str>,
) -> Result<Vec<BeanCase>, ContractViolation> {
    registry.validate()?;

    let mut cases = Vec::new();
    for entry in registry.subtypes_of(namespace) {
        if !entry.descriptor.is_instantiable() {
            continue;
        }
        let root = resolve_root(registry, entry.name())?;
        cases.push(BeanCase {
            root: root.name,
            concrete: entry.name(),
            name: entry.name().to_string(),
        });
    }

    if cases.is_empty() {
        tracing::error!(
            namespace = namespace.unwrap_or("<all>"),
            registered = registry.len(),
            "bean discovery found no concrete types"
        );
        return Err(ContractViolation::NoBeansDiscovered {
            namespace: namespace.map(str::to_string),
        });
    }

    tracing::info!(count = cases.len(), "discovered bean types");
    Ok(cases)
}
