//! # Engine Errors
//!
//! Every decode-side error carries the raw payload text. A failing round trip
//! is only debuggable if the exact bytes that failed are in the report.

use beancheck_core::BeanError;
use thiserror::Error;

/// Failure inside a wire format codec.
#[derive(Error, Debug)]
pub enum FormatError {
    /// JSON codec failure.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML codec failure.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialization engine failure.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The bean could not be rendered.
    #[error("failed to encode {bean}: {source}")]
    Encode {
        /// Concrete type being encoded.
        bean: String,
        /// Underlying codec error.
        #[source]
        source: FormatError,
    },

    /// The payload could not be read back as the target type.
    #[error("failed to decode payload as {target}: {source}")]
    Decode {
        /// Requested deserialization target.
        target: String,
        /// Raw payload text.
        payload: String,
        /// Underlying codec error.
        #[source]
        source: FormatError,
    },

    /// A polymorphic target's payload has no discriminator property.
    #[error("payload for {target} has no discriminator property {property:?}")]
    MissingDiscriminator {
        /// Requested deserialization target.
        target: String,
        /// Expected discriminator property.
        property: String,
        /// Raw payload text.
        payload: String,
    },

    /// The discriminator names no subtype registered under the target.
    #[error("no subtype of {target} registered for discriminator {tag}")]
    UnknownDiscriminator {
        /// Requested deserialization target.
        target: String,
        /// Tag found in the payload, rendered as text.
        tag: String,
        /// Raw payload text.
        payload: String,
    },

    /// The bean already emits a property named like the discriminator.
    #[error("{bean} emits property {property:?}, which collides with its discriminator")]
    TagCollision {
        /// Concrete type being encoded.
        bean: String,
        /// Colliding property.
        property: String,
    },

    /// A tagged subtype serialized to something other than an object.
    #[error("{bean} does not serialize to an object and cannot carry a discriminator")]
    UntaggableValue {
        /// Concrete type being encoded.
        bean: String,
    },

    /// Two different subtypes under one root claim the same tag.
    #[error("tag {tag:?} under {root} is already bound to {bound}; cannot bind it to {subtype}")]
    DuplicateTag {
        /// Family root.
        root: String,
        /// Contested tag.
        tag: String,
        /// Subtype already bound to the tag.
        bound: String,
        /// Subtype whose registration was refused.
        subtype: String,
    },

    /// Decode was asked for a target the engine was never configured with.
    #[error("no decoder registered for target {0}")]
    UnregisteredTarget(String),

    /// Registration with inconsistent metadata.
    #[error("metadata error: {0}")]
    Metadata(#[from] BeanError),
}

impl EngineError {
    /// The raw payload associated with a decode-side failure.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Decode { payload, .. }
            | Self::MissingDiscriminator { payload, .. }
            | Self::UnknownDiscriminator { payload, .. } => Some(payload),
            _ => None,
        }
    }
}
