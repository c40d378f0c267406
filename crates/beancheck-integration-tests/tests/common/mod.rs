//! Shared fixture catalogue for the integration tests.
//!
//! `fixtures` holds beans that honor every contract; `defects` holds beans
//! that each break exactly one. Both are registered in the same table and
//! separated with the namespace filter.

#![allow(dead_code)]

use beancheck_core::BeanRegistry;
use tracing_subscriber::EnvFilter;

pub mod defects;
pub mod fixtures;

/// Install a test-writer subscriber once per binary; `RUST_LOG` overrides
/// the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .try_init();
}

/// Every well-formed fixture and its abstract roots.
pub fn catalogue() -> BeanRegistry {
    let mut registry = BeanRegistry::new();
    fixtures::register(&mut registry);
    registry
}

/// Well-formed fixtures plus the defect beans.
pub fn catalogue_with_defects() -> BeanRegistry {
    let mut registry = catalogue();
    defects::register(&mut registry);
    registry
}
