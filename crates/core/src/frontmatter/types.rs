//! Frontmatter types and data structures.

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use super::error::{FrontmatterError, fragment};

/// Line that opens and closes the metadata block.
pub const DELIMITER: &str = "---";

/// Parsed YAML frontmatter, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    pub fields: Mapping,
}

impl Frontmatter {
    pub fn new(fields: Mapping) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a top-level field by its string key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Map the fields onto a typed value.
    ///
    /// Missing keys follow the target type's serde defaults.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, FrontmatterError> {
        serde_yaml::from_value(Value::Mapping(self.fields.clone())).map_err(|source| {
            let rendered = serde_yaml::to_string(&self.fields).unwrap_or_default();
            FrontmatterError::MalformedMetadata { fragment: fragment(&rendered), source }
        })
    }
}

/// Result of splitting frontmatter from a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    /// Parsed frontmatter; empty when the document had none.
    pub frontmatter: Frontmatter,
    /// Everything after the closing delimiter, trimmed.
    pub body: String,
}
