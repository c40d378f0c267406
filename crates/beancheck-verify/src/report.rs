//! # Verification Reports
//!
//! Per-bean and per-suite outcomes. A [`SuiteReport`] always carries the base
//! seed it ran with, so a red suite can be replayed by exporting
//! `BEANCHECK_SEED` with the reported value.

use std::fmt;

use beancheck_engine::WireFormat;
use thiserror::Error;

use crate::discovery::BeanCase;
use crate::error::ContractViolation;
use crate::verifier::CheckKind;

/// Result of one check for one bean.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Which check ran.
    pub check: CheckKind,
    /// Its verdict.
    pub result: Result<(), ContractViolation>,
}

impl CheckOutcome {
    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// All check outcomes for one bean.
#[derive(Debug)]
pub struct CaseReport {
    /// The bean under test.
    pub case: BeanCase,
    /// One outcome per check, in execution order.
    pub outcomes: Vec<CheckOutcome>,
}

impl CaseReport {
    /// Whether every check passed.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Failed checks, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// The outcome of a specific check, if it ran.
    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check == check)
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "ok     {} [{}]", self.case.name, outcome.check)?,
                Err(e) => writeln!(f, "FAILED {} [{}]: {e}", self.case.name, outcome.check)?,
            }
        }
        Ok(())
    }
}

/// Outcomes for every discovered bean.
#[derive(Debug)]
pub struct SuiteReport {
    /// Seed every sample seed was derived from.
    pub base_seed: u64,
    /// Wire format exercised.
    pub wire_format: WireFormat,
    /// One report per bean, in discovery order.
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    /// Whether every check of every bean passed.
    pub fn is_success(&self) -> bool {
        self.cases.iter().all(CaseReport::is_success)
    }

    /// `(bean, failed outcome)` pairs across the suite.
    pub fn failures(&self) -> impl Iterator<Item = (&BeanCase, &CheckOutcome)> {
        self.cases
            .iter()
            .flat_map(|report| report.failures().map(move |o| (&report.case, o)))
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Total number of checks run.
    pub fn check_count(&self) -> usize {
        self.cases.iter().map(|c| c.outcomes.len()).sum()
    }

    /// Report for a bean by name.
    pub fn case(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|c| c.case.name == name)
    }

    /// `Ok(self)` when green, otherwise a [`SuiteFailure`] carrying the
    /// rendered report.
    pub fn into_result(self) -> Result<Self, SuiteFailure> {
        if self.is_success() {
            return Ok(self);
        }
        Err(SuiteFailure {
            failed: self.failure_count(),
            total: self.check_count(),
            base_seed: self.base_seed,
            summary: self.to_string(),
        })
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "bean contract suite: {} beans, {} checks, {} failed (seed {}, format {})",
            self.cases.len(),
            self.check_count(),
            self.failure_count(),
            self.base_seed,
            self.wire_format
        )?;
        for (case, outcome) in self.failures() {
            if let Err(e) = &outcome.result {
                writeln!(f, "  {} [{}]: {e}", case.name, outcome.check)?;
            }
        }
        Ok(())
    }
}

/// A suite with at least one failed check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{failed} of {total} bean contract checks failed; replay with BEANCHECK_SEED={base_seed}\n{summary}")]
pub struct SuiteFailure {
    /// Failed checks.
    pub failed: usize,
    /// Checks run.
    pub total: usize,
    /// Seed to replay with.
    pub base_seed: u64,
    /// Rendered report.
    pub summary: String,
}
