//! # Verifier Configuration
//!
//! Suite tunables, loaded from the environment with defaults for every value:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BEANCHECK_SAMPLES` | `10` | round-trip samples per bean |
//! | `BEANCHECK_SEED` | random | suite seed; set it to replay a failure |
//! | `BEANCHECK_WIRE_FORMAT` | `json` | `json` or `yaml` |
//! | `BEANCHECK_TEMPORAL_HORIZON_SECS` | current epoch | instant window half-width |
//! | `BEANCHECK_MAX_DEPTH` | `4` | times a recursive type may recur inside itself (at least 1) |
//! | `BEANCHECK_NAMESPACE` | unset | only beans whose name starts with this prefix |

use std::str::FromStr;

use beancheck_engine::WireFormat;
use beancheck_synth::{SynthConfig, TemporalBounds};
use thiserror::Error;

/// Configuration error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment value failed to parse.
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        /// Variable name.
        var: String,
        /// Offending value.
        value: String,
        /// Parse failure.
        reason: String,
    },

    /// A serde check that samples nothing would pass vacuously.
    #[error("samples must be at least 1")]
    ZeroSamples,

    /// A zero recursion limit would leave recursive containers empty.
    #[error("max depth must be at least 1")]
    ZeroDepth,
}

/// Round-trip verifier configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Round-trip samples per bean.
    pub samples: usize,
    /// Suite seed from which every sample seed is derived.
    pub base_seed: u64,
    /// Wire format the engine encodes to.
    pub wire_format: WireFormat,
    /// Half-width of the instant window, in seconds.
    pub temporal_horizon_secs: i64,
    /// Recursion limit for synthesis.
    pub max_depth: usize,
    /// Bean name prefix filter.
    pub namespace: Option<String>,
}

impl VerifierConfig {
    /// Default number of round-trip samples per bean.
    pub const DEFAULT_SAMPLES: usize = 10;

    /// Load from `BEANCHECK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            samples: parse_var(&lookup, "BEANCHECK_SAMPLES")?.unwrap_or(defaults.samples),
            base_seed: parse_var(&lookup, "BEANCHECK_SEED")?.unwrap_or(defaults.base_seed),
            wire_format: parse_var(&lookup, "BEANCHECK_WIRE_FORMAT")?
                .unwrap_or(defaults.wire_format),
            temporal_horizon_secs: parse_var(&lookup, "BEANCHECK_TEMPORAL_HORIZON_SECS")?
                .unwrap_or(defaults.temporal_horizon_secs),
            max_depth: parse_var(&lookup, "BEANCHECK_MAX_DEPTH")?.unwrap_or(defaults.max_depth),
            namespace: lookup("BEANCHECK_NAMESPACE").filter(|ns| !ns.is_empty()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make checks vacuous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }

    /// Set the sample count.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the suite seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Set the wire format.
    pub fn with_wire_format(mut self, format: WireFormat) -> Self {
        self.wire_format = format;
        self
    }

    /// Set the temporal horizon.
    pub fn with_temporal_horizon(mut self, secs: i64) -> Self {
        self.temporal_horizon_secs = secs;
        self
    }

    /// Set the recursion limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Restrict discovery to a name prefix.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Synthesizer configuration derived from this config.
    pub fn synth_config(&self) -> SynthConfig {
        SynthConfig {
            max_depth: self.max_depth,
            temporal: TemporalBounds::fixed(self.temporal_horizon_secs),
            ..SynthConfig::default()
        }
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            samples: Self::DEFAULT_SAMPLES,
            base_seed: rand::random(),
            wire_format: WireFormat::default(),
            temporal_horizon_secs: TemporalBounds::current().horizon_secs(),
            max_depth: SynthConfig::DEFAULT_MAX_DEPTH,
            namespace: None,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Invalid {
            var: var.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        })
}
