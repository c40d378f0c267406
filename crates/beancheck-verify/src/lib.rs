//! # beancheck-verify — Bean Contract Verification
//!
//! Discovers every registered concrete bean and checks, without per-type
//! hand-written tests, that each one:
//!
//! | Check | Asserts |
//! |-------|---------|
//! | `constructor_parameters` | every serialized property has a constructor parameter of the same name and type |
//! | `no_setters` | no property exposes a mutator |
//! | `final_properties` | no property is backed by mutable storage |
//! | `serialized_properties` | the properties the serializer emits are exactly the described ones |
//! | `serde` | N synthesized samples survive encode -> decode-as-root unchanged |
//!
//! ## Usage
//!
//! ```ignore
//! let mut registry = BeanRegistry::new();
//! registry.register::<Point>()?;
//! let report = run_suite(&registry, &VerifierConfig::from_env()?)?;
//! report.into_result()?;
//! ```
//!
//! ## Error Taxonomy
//!
//! - Discovering zero beans is a configuration error and fails the suite.
//! - Structural defects are reported per check; one failing check never
//!   hides another for the same bean.
//! - Encode/decode failures abort that bean's sampling and carry the payload.
//! - Equality mismatches carry the payload, the seed and a field-level diff.

pub mod config;
pub mod diff;
pub mod discovery;
pub mod error;
pub mod report;
pub mod suite;
pub mod verifier;

pub use config::{ConfigError, VerifierConfig};
pub use diff::{FieldDifference, StructuralDiff};
pub use discovery::{discover, BeanCase};
pub use error::ContractViolation;
pub use report::{CaseReport, CheckOutcome, SuiteFailure, SuiteReport};
pub use suite::{run_suite, run_suite_with};
pub use verifier::{CheckKind, Verifier, INSPECTION_SAMPLE};
