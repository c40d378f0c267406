//! # Wire Formats
//!
//! Textual formats a bean payload can travel in. Each format converts between
//! text and the `serde_json::Value` tree the engine tags and dispatches on.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::FormatError;

/// A textual wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WireFormat {
    /// Compact JSON.
    #[default]
    Json,
    /// YAML 1.2 block style.
    Yaml,
}

impl WireFormat {
    /// Render a value tree as text.
    pub fn render(&self, value: &Value) -> Result<String, FormatError> {
        match self {
            Self::Json => Ok(serde_json::to_string(value)?),
            Self::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }

    /// Parse text into a value tree.
    pub fn parse(&self, text: &str) -> Result<Value, FormatError> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown wire format: {other:?}")),
        }
    }
}
