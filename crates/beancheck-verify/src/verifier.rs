//! # Round-Trip Verifier
//!
//! Runs the contract checks for one [`BeanCase`]. The structural checks read
//! the introspected [`TypeDescription`]; the round-trip check drives a
//! per-case copy of the serialization engine through
//! synthesize -> encode -> decode-as-root -> compare, once per sample.
//!
//! Samples are seeded with [`derive_seed`]`(base_seed, bean name, index)`,
//! so the seed in a failure report reproduces the failing instance exactly.

use std::fmt;

use beancheck_core::{describe, BeanCodec, BeanError, BeanRegistry, TypeDescription};
use beancheck_engine::{FormatError, SerializationEngine};
use beancheck_synth::{derive_seed, Synthesizer};

use crate::config::VerifierConfig;
use crate::diff::StructuralDiff;
use crate::discovery::BeanCase;
use crate::error::ContractViolation;
use crate::report::{CaseReport, CheckOutcome};

/// Sample index reserved for the serialized-properties inspection, outside
/// the range used by round-trip samples.
pub const INSPECTION_SAMPLE: u64 = u64::MAX;

/// The independent checks run for every bean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckKind {
    /// Every property has a matching constructor parameter.
    ConstructorParameters,
    /// No property exposes a mutator.
    NoSetters,
    /// No property has mutable backing storage.
    FinalProperties,
    /// Emitted properties equal described properties.
    SerializedProperties,
    /// Sampled encode/decode round trips preserve equality.
    Serde,
}

impl CheckKind {
    /// All checks, in execution order.
    pub const ALL: [CheckKind; 5] = [
        Self::ConstructorParameters,
        Self::NoSetters,
        Self::FinalProperties,
        Self::SerializedProperties,
        Self::Serde,
    ];

    /// Report identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConstructorParameters => "constructor_parameters",
            Self::NoSetters => "no_setters",
            Self::FinalProperties => "final_properties",
            Self::SerializedProperties => "serialized_properties",
            Self::Serde => "serde",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract checker bound to a registry and a base engine.
#[derive(Debug)]
pub struct Verifier<'r, E> {
    registry: &'r BeanRegistry,
    engine: E,
    config: VerifierConfig,
}

impl<'r, E: SerializationEngine> Verifier<'r, E> {
    /// Create a verifier. `engine` is never mutated; each round-trip check
    /// configures its own copy.
    pub fn new(registry: &'r BeanRegistry, engine: E, config: VerifierConfig) -> Self {
        Self {
            registry,
            engine,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Run every check for `case`. A failing check never prevents the others.
    pub fn verify(&self, case: &BeanCase) -> CaseReport {
        let description = self.registry.descriptor(case.concrete).map(describe);
        let outcomes = CheckKind::ALL
            .iter()
            .map(|&check| {
                let result = match &description {
                    Ok(description) => self.run_check(case, description, check),
                    Err(e) => Err(ContractViolation::Metadata(e.clone())),
                };
                match &result {
                    Ok(()) => tracing::debug!(bean = %case.name, %check, "check passed"),
                    Err(e) => tracing::warn!(bean = %case.name, %check, error = %e, "check failed"),
                }
                CheckOutcome { check, result }
            })
            .collect();
        CaseReport {
            case: case.clone(),
            outcomes,
        }
    }

    /// Run a single check for `case`.
    pub fn check(&self, case: &BeanCase, check: CheckKind) -> Result<(), ContractViolation> {
        let description = describe(self.registry.descriptor(case.concrete)?);
        self.run_check(case, &description, check)
    }

    fn run_check(
        &self,
        case: &BeanCase,
        description: &TypeDescription,
        check: CheckKind,
    ) -> Result<(), ContractViolation> {
        match check {
            CheckKind::ConstructorParameters => constructor_parameters(description),
            CheckKind::NoSetters => no_setters(description),
            CheckKind::FinalProperties => final_properties(description),
            CheckKind::SerializedProperties => self.serialized_properties(case, description),
            CheckKind::Serde => self.serde(case),
        }
    }

    fn codec(&self, case: &BeanCase) -> Result<BeanCodec, BeanError> {
        self.registry
            .get(case.concrete)
            .ok_or_else(|| BeanError::UnknownType(case.concrete.to_string()))?
            .codec()
    }

    fn serialized_properties(
        &self,
        case: &BeanCase,
        description: &TypeDescription,
    ) -> Result<(), ContractViolation> {
        let codec = self.codec(case)?;
        let seed = derive_seed(self.config.base_seed, &case.name, INSPECTION_SAMPLE);
        let mut synth = Synthesizer::new(seed, self.config.synth_config());
        let sample = (codec.synthesize)(&mut synth);
        let value = sample
            .to_value()
            .map_err(|e| ContractViolation::InspectionFailed {
                bean: case.name.clone(),
                seed,
                instance: format!("{sample:?}"),
                source: FormatError::from(e),
            })?;

        let emitted: Vec<String> = match &value {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        };
        let described: Vec<&str> = description.properties.iter().map(|p| p.name).collect();
        let undescribed: Vec<String> = emitted
            .iter()
            .filter(|key| !described.contains(&key.as_str()))
            .cloned()
            .collect();
        let unemitted: Vec<String> = described
            .iter()
            .filter(|name| !emitted.iter().any(|key| key == *name))
            .map(|name| name.to_string())
            .collect();

        if undescribed.is_empty() && unemitted.is_empty() {
            Ok(())
        } else {
            Err(ContractViolation::UndescribedProperties {
                bean: case.name.clone(),
                undescribed,
                unemitted,
            })
        }
    }

    fn serde(&self, case: &BeanCase) -> Result<(), ContractViolation> {
        let codec = self.codec(case)?;
        let concrete = self.registry.descriptor(case.concrete)?;
        let root = self.registry.descriptor(case.root)?;

        let mut engine = self.engine.copy();
        engine
            .register_subtype(concrete, codec, root)
            .map_err(|source| ContractViolation::EngineSetup {
                bean: case.name.clone(),
                source,
            })?;

        let synth_config = self.config.synth_config();
        for sample in 0..self.config.samples {
            let seed = derive_seed(self.config.base_seed, &case.name, sample as u64);
            let mut synth = Synthesizer::new(seed, synth_config);
            let original = (codec.synthesize)(&mut synth);

            let payload = engine
                .encode(original.as_ref())
                .map_err(|source| ContractViolation::EncodeFailed {
                    bean: case.name.clone(),
                    sample,
                    seed,
                    instance: format!("{original:?}"),
                    source,
                })?;
            tracing::debug!(bean = %case.name, sample, seed, %payload, "encoded sample");

            let decoded = engine
                .decode(&payload, case.root)
                .map_err(|source| ContractViolation::DecodeFailed {
                    bean: case.name.clone(),
                    root: case.root.to_string(),
                    sample,
                    seed,
                    payload: payload.clone(),
                    source,
                })?;

            if !decoded.dyn_eq(original.as_ref()) {
                return Err(ContractViolation::Mismatch {
                    bean: case.name.clone(),
                    sample,
                    seed,
                    diff: StructuralDiff::between(original.as_ref(), decoded.as_ref()),
                    payload,
                });
            }
        }

        tracing::info!(
            bean = %case.name,
            root = case.root,
            samples = self.config.samples,
            "round trip verified"
        );
        Ok(())
    }
}

fn constructor_parameters(description: &TypeDescription) -> Result<(), ContractViolation> {
    let missing: Vec<(String, String)> = description
        .missing_constructor_params()
        .map(|p| (p.name.to_string(), p.type_name.to_string()))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(ContractViolation::MissingConstructorParameters {
        bean: description.name.to_string(),
        properties: missing,
    })
}

fn no_setters(description: &TypeDescription) -> Result<(), ContractViolation> {
    let offending: Vec<&str> = description.with_mutators().map(|p| p.name).collect();
    if offending.is_empty() {
        return Ok(());
    }
    Err(ContractViolation::MutatorsPresent {
        bean: description.name.to_string(),
        properties: offending.join(", "),
    })
}

fn final_properties(description: &TypeDescription) -> Result<(), ContractViolation> {
    let offending: Vec<&str> = description.with_mutable_storage().map(|p| p.name).collect();
    if offending.is_empty() {
        return Ok(());
    }
    Err(ContractViolation::MutableFields {
        bean: description.name.to_string(),
        fields: offending.join(", "),
    })
}
