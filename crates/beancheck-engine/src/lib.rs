//! # beancheck-engine — Text Serialization Engine
//!
//! The encode/decode collaborator the round-trip verifier drives. A
//! [`TextEngine`] renders beans to a textual [`WireFormat`] and reads them
//! back, resolving polymorphic families through discriminator tags the way a
//! consumer on the far side of a message queue would.
//!
//! All encoding flows through the format-neutral `serde_json::Value` tree, so
//! discriminator handling is written once and shared by every wire format.

pub mod engine;
pub mod error;
pub mod format;

pub use engine::{SerializationEngine, TextEngine};
pub use error::{EngineError, FormatError};
pub use format::WireFormat;
