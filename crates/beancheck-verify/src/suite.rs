//! # Suite Driver
//!
//! Discovery followed by verification of every case. Suite-level errors
//! (bad configuration, broken hierarchy, nothing discovered) are returned as
//! `Err`; per-bean defects land in the [`SuiteReport`].

use beancheck_core::BeanRegistry;
use beancheck_engine::{SerializationEngine, TextEngine};

use crate::config::VerifierConfig;
use crate::discovery::discover;
use crate::error::ContractViolation;
use crate::report::SuiteReport;
use crate::verifier::Verifier;

/// Verify every bean in `registry` with a [`TextEngine`] in the configured
/// wire format.
pub fn run_suite(
    registry: &BeanRegistry,
    config: &VerifierConfig,
) -> Result<SuiteReport, ContractViolation> {
    run_suite_with(registry, TextEngine::new(config.wire_format), config)
}

/// Verify every bean in `registry` with a caller-supplied base engine.
pub fn run_suite_with<E: SerializationEngine>(
    registry: &BeanRegistry,
    engine: E,
    config: &VerifierConfig,
) -> Result<SuiteReport, ContractViolation> {
    config.validate()?;
    let cases = discover(registry, config.namespace.as_deref())?;

    tracing::info!(
        beans = cases.len(),
        samples = config.samples,
        seed = config.base_seed,
        format = %config.wire_format,
        "running bean contract suite"
    );

    let verifier = Verifier::new(registry, engine, config.clone());
    let report = SuiteReport {
        base_seed: config.base_seed,
        wire_format: config.wire_format,
        cases: cases.iter().map(|case| verifier.verify(case)).collect(),
    };

    if report.is_success() {
        tracing::info!(checks = report.check_count(), "bean contract suite passed");
    } else {
        tracing::warn!(
            failed = report.failure_count(),
            checks = report.check_count(),
            seed = config.base_seed,
            "bean contract suite failed"
        );
    }
    Ok(report)
}
