//! # Serialization Engine
//!
//! [`SerializationEngine`] is the seam between the verifier and the codec.
//! [`TextEngine`] implements it over a [`WireFormat`] with name-tagged
//! polymorphism:
//!
//! - **Encode.** The bean is serialized to a value tree. If its type was
//!   registered as a subtype of a discriminated root, the root's
//!   discriminator property is inserted with the subtype's tag.
//! - **Decode.** If the target is a discriminated root, the tag is read,
//!   stripped, and used to select the registered subtype decoder. Any other
//!   target is decoded directly with its own decoder.
//!
//! ## Concurrency
//!
//! Registration mutates the engine. Each test case configures its own
//! [`SerializationEngine::copy`] of a shared base engine and never shares the
//! configured copy.

use std::collections::BTreeMap;

use beancheck_core::{BeanCodec, BeanDescriptor, DecodeFn, DynBean};
use serde_json::Value;

use crate::error::{EngineError, FormatError};
use crate::format::WireFormat;

/// Encode/decode collaborator driven by the round-trip verifier.
pub trait SerializationEngine {
    /// Render a bean as wire text.
    fn encode(&self, bean: &dyn DynBean) -> Result<String, EngineError>;

    /// Read wire text back as an instance of `target` (a registered type
    /// name, typically a polymorphic root).
    fn decode(&self, payload: &str, target: &str) -> Result<Box<dyn DynBean>, EngineError>;

    /// Make `subtype` decodable through `root`. When `root` carries its own
    /// discriminator, `subtype` payloads are tagged on encode.
    fn register_subtype(
        &mut self,
        subtype: &BeanDescriptor,
        codec: BeanCodec,
        root: &BeanDescriptor,
    ) -> Result<(), EngineError>;

    /// An independent engine with the same configuration.
    fn copy(&self) -> Self
    where
        Self: Sized;
}

/// How a registered subtype is tagged on encode.
#[derive(Debug, Clone, Copy)]
struct Tagging {
    property: &'static str,
    tag: &'static str,
}

/// A subtype decoder bound to a tag under a family root.
#[derive(Debug, Clone, Copy)]
struct Subtype {
    name: &'static str,
    decode: DecodeFn,
}

/// A decodable target type.
#[derive(Debug, Clone, Default)]
struct Target {
    /// Discriminator property when the target is a family root.
    discriminator: Option<&'static str>,
    /// Decoder for untagged targets.
    direct: Option<DecodeFn>,
    /// Tag -> subtype decoder for family roots.
    subtypes: BTreeMap<&'static str, Subtype>,
}

/// Text engine over a [`WireFormat`].
#[derive(Debug, Clone, Default)]
pub struct TextEngine {
    format: WireFormat,
    targets: BTreeMap<&'static str, Target>,
    tagging: BTreeMap<&'static str, Tagging>,
}

impl TextEngine {
    /// An unconfigured engine for `format`.
    pub fn new(format: WireFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// The engine's wire format.
    pub fn format(&self) -> WireFormat {
        self.format
    }

    /// Whether `name` can be used as a decode target.
    pub fn is_target(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    fn tag_value(&self, bean: &dyn DynBean, value: &mut Value) -> Result<(), EngineError> {
        let Some(tagging) = self.tagging.get(bean.type_name()) else {
            return Ok(());
        };
        let Value::Object(map) = value else {
            return Err(EngineError::UntaggableValue {
                bean: bean.type_name().to_string(),
            });
        };
        if map.contains_key(tagging.property) {
            return Err(EngineError::TagCollision {
                bean: bean.type_name().to_string(),
                property: tagging.property.to_string(),
            });
        }
        map.insert(tagging.property.to_string(), Value::String(tagging.tag.to_string()));
        Ok(())
    }

    fn select_decoder(
        &self,
        target_name: &str,
        target: &Target,
        value: &mut Value,
        payload: &str,
    ) -> Result<DecodeFn, EngineError> {
        let Some(property) = target.discriminator else {
            return target
                .direct
                .ok_or_else(|| EngineError::UnregisteredTarget(target_name.to_string()));
        };
        let missing = || EngineError::MissingDiscriminator {
            target: target_name.to_string(),
            property: property.to_string(),
            payload: payload.to_string(),
        };
        let tag = match value {
            Value::Object(map) => map.remove(property).ok_or_else(missing)?,
            _ => return Err(missing()),
        };
        let unknown = |tag: String| EngineError::UnknownDiscriminator {
            target: target_name.to_string(),
            tag,
            payload: payload.to_string(),
        };
        match &tag {
            Value::String(name) => target
                .subtypes
                .get(name.as_str())
                .map(|subtype| subtype.decode)
                .ok_or_else(|| unknown(name.clone())),
            other => Err(unknown(other.to_string())),
        }
    }
}

impl SerializationEngine for TextEngine {
    fn encode(&self, bean: &dyn DynBean) -> Result<String, EngineError> {
        let encode_err = |source: FormatError| EngineError::Encode {
            bean: bean.type_name().to_string(),
            source,
        };
        let mut value = bean.to_value().map_err(|e| encode_err(e.into()))?;
        self.tag_value(bean, &mut value)?;
        self.format.render(&value).map_err(encode_err)
    }

    fn decode(&self, payload: &str, target: &str) -> Result<Box<dyn DynBean>, EngineError> {
        let entry = self
            .targets
            .get(target)
            .ok_or_else(|| EngineError::UnregisteredTarget(target.to_string()))?;
        let decode_err = |source: FormatError| EngineError::Decode {
            target: target.to_string(),
            payload: payload.to_string(),
            source,
        };
        let mut value = self.format.parse(payload).map_err(decode_err)?;
        let decoder = self.select_decoder(target, entry, &mut value, payload)?;
        decoder(value).map_err(|e| decode_err(e.into()))
    }

    fn register_subtype(
        &mut self,
        subtype: &BeanDescriptor,
        codec: BeanCodec,
        root: &BeanDescriptor,
    ) -> Result<(), EngineError> {
        match root.discriminator {
            Some(discriminator) => {
                let tag = subtype.type_tag();
                let target = self.targets.entry(root.name).or_default();
                if let Some(bound) = target.subtypes.get(tag) {
                    if bound.name != subtype.name {
                        return Err(EngineError::DuplicateTag {
                            root: root.name.to_string(),
                            tag: tag.to_string(),
                            bound: bound.name.to_string(),
                            subtype: subtype.name.to_string(),
                        });
                    }
                }
                target.discriminator = Some(discriminator.property);
                target.subtypes.insert(
                    tag,
                    Subtype {
                        name: subtype.name,
                        decode: codec.decode,
                    },
                );
                self.tagging.insert(
                    subtype.name,
                    Tagging {
                        property: discriminator.property,
                        tag,
                    },
                );
            }
            None if root.name == subtype.name => {
                self.targets.entry(subtype.name).or_default().direct = Some(codec.decode);
            }
            None => {
                // A non-discriminated root cannot tell its subtypes apart on the wire.
                return Err(EngineError::UnregisteredTarget(root.name.to_string()));
            }
        }
        tracing::trace!(
            subtype = subtype.name,
            root = root.name,
            format = %self.format,
            "registered subtype"
        );
        Ok(())
    }

    fn copy(&self) -> Self {
        self.clone()
    }
}
