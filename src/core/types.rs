//! Shared types for the decode pipeline.

use std::fmt;

/// The parsed document.
///
/// A tagged variant over string, number, bool, null, mapping, sequence and
/// YAML tagged values. Mappings keep insertion order and accept any key,
/// so YAML documents with non-string keys survive a round trip.
pub type Tree = serde_yaml::Value;

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Classify raw input. See [`crate::core::detect::is_json`].
    pub fn detect(input: &[u8]) -> Self {
        if crate::core::detect::is_json(input) {
            Self::Json
        } else {
            Self::Yaml
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
