//! Frontmatter serialization back to file content.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::error::FrontmatterError;
use super::types::DELIMITER;

/// Serialize metadata and a body into file content.
///
/// Layout is the opening delimiter, the YAML block, the closing delimiter,
/// then (only for a non-empty body) one blank line, the trimmed body and a
/// trailing newline.
pub fn serialize<T>(metadata: &T, body: &str) -> Result<String, FrontmatterError>
where
    T: Serialize + ?Sized,
{
    let value = serde_yaml::to_value(metadata).map_err(FrontmatterError::Serialize)?;
    let mapping = into_mapping(value)?;
    serialize_mapping(&mapping, body)
}

/// Serialize an already-built mapping and a body into file content.
pub fn serialize_mapping(metadata: &Mapping, body: &str) -> Result<String, FrontmatterError> {
    let yaml = serde_yaml::to_string(metadata).map_err(FrontmatterError::Serialize)?;
    // The parser ends the block at the first line that trims to the delimiter.
    if let Some(idx) = yaml.lines().position(|line| line.trim() == DELIMITER) {
        return Err(FrontmatterError::DelimiterInMetadata { line: idx + 2 });
    }
    let body = body.trim();

    let mut out = String::with_capacity(yaml.len() + body.len() + 16);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(&yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(DELIMITER);
    out.push('\n');

    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }

    Ok(out)
}

/// Require a serialized value to be a mapping.
pub(crate) fn into_mapping(value: Value) -> Result<Mapping, FrontmatterError> {
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Err(FrontmatterError::NilMetadata),
        Value::Bool(_) => Err(FrontmatterError::NotAMapping("a boolean")),
        Value::Number(_) => Err(FrontmatterError::NotAMapping("a number")),
        Value::String(_) => Err(FrontmatterError::NotAMapping("a string")),
        Value::Sequence(_) => Err(FrontmatterError::NotAMapping("a sequence")),
        Value::Tagged(_) => Err(FrontmatterError::NotAMapping("a tagged value")),
    }
}
