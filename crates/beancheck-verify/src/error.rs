//! # Contract Violations
//!
//! Every way a bean, or the suite around it, can fail verification. Each
//! variant names the bean, and every round-trip variant names the sample
//! seed so the failure can be replayed with `BEANCHECK_SEED`.

use beancheck_core::BeanError;
use beancheck_engine::{EngineError, FormatError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::diff::StructuralDiff;

/// A failed contract check or suite-level configuration error.
#[derive(Error, Debug)]
pub enum ContractViolation {
    /// Discovery produced no concrete beans. Never a valid "nothing to test"
    /// state: the registration table or namespace filter is broken.
    #[error("no concrete bean types discovered{}", namespace.as_ref().map(|ns| format!(" under namespace {ns:?}")).unwrap_or_default())]
    NoBeansDiscovered {
        /// Namespace filter in effect, if any.
        namespace: Option<String>,
    },

    /// Properties the constructor cannot set.
    #[error("{bean}: no constructor parameter for {}", format_typed(properties))]
    MissingConstructorParameters {
        /// Bean type.
        bean: String,
        /// `(property, type)` pairs without a matching parameter.
        properties: Vec<(String, String)>,
    },

    /// Properties exposing mutators.
    #[error("{bean}: properties with mutators: {properties}")]
    MutatorsPresent {
        /// Bean type.
        bean: String,
        /// Comma-joined property names.
        properties: String,
    },

    /// Properties with mutable backing storage.
    #[error("{bean}: mutable fields: {fields}")]
    MutableFields {
        /// Bean type.
        bean: String,
        /// Comma-joined field names.
        fields: String,
    },

    /// The serializer's output disagrees with the descriptor.
    #[error("{bean}: serialized properties diverge from descriptor (undescribed: [{}], never emitted: [{}])", undescribed.join(", "), unemitted.join(", "))]
    UndescribedProperties {
        /// Bean type.
        bean: String,
        /// Emitted but not described.
        undescribed: Vec<String>,
        /// Described but not emitted.
        unemitted: Vec<String>,
    },

    /// The per-case engine could not be configured.
    #[error("{bean}: engine setup failed: {source}")]
    EngineSetup {
        /// Bean type.
        bean: String,
        /// Engine error.
        #[source]
        source: EngineError,
    },

    /// A synthesized sample could not be encoded.
    #[error("{bean}: sample {sample} (seed {seed}) failed to encode: {source}\ninstance: {instance}")]
    EncodeFailed {
        /// Bean type.
        bean: String,
        /// Sample index.
        sample: usize,
        /// Sample seed.
        seed: u64,
        /// Debug rendering of the instance.
        instance: String,
        /// Engine error.
        #[source]
        source: EngineError,
    },

    /// The sample drawn to inspect emitted properties could not be
    /// serialized. Its seed is derived from the reserved inspection index,
    /// not from a round-trip sample index.
    #[error("{bean}: property inspection sample (seed {seed}) failed to serialize: {source}\ninstance: {instance}")]
    InspectionFailed {
        /// Bean type.
        bean: String,
        /// Sample seed.
        seed: u64,
        /// Debug rendering of the instance.
        instance: String,
        /// Codec error.
        #[source]
        source: FormatError,
    },

    /// A payload could not be decoded as the root type.
    #[error("{bean}: sample {sample} (seed {seed}) failed to decode as {root}: {source}\npayload: {payload}")]
    DecodeFailed {
        /// Bean type.
        bean: String,
        /// Deserialization target.
        root: String,
        /// Sample index.
        sample: usize,
        /// Sample seed.
        seed: u64,
        /// Raw payload text.
        payload: String,
        /// Engine error.
        #[source]
        source: EngineError,
    },

    /// The decoded instance is not equal to the original.
    #[error("{bean}: sample {sample} (seed {seed}) did not round-trip: {diff}\npayload: {payload}")]
    Mismatch {
        /// Bean type.
        bean: String,
        /// Sample index.
        sample: usize,
        /// Sample seed.
        seed: u64,
        /// Raw payload text.
        payload: String,
        /// Field-level difference.
        diff: StructuralDiff,
    },

    /// Broken registry metadata.
    #[error("metadata error: {0}")]
    Metadata(#[from] BeanError),

    /// Broken configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ContractViolation {
    /// Whether this is a suite-level configuration error rather than a
    /// defect of one bean.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::NoBeansDiscovered { .. } | Self::Metadata(_) | Self::Config(_)
        )
    }

    /// Raw payload associated with a round-trip failure.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::DecodeFailed { payload, .. } | Self::Mismatch { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

fn format_typed(properties: &[(String, String)]) -> String {
    properties
        .iter()
        .map(|(name, type_name)| format!("{name}: {type_name}"))
        .collect::<Vec<_>>()
        .join(", ")
}
