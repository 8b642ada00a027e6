//! Frontmatter parsing from record files.

use serde_yaml::{Mapping, Value};

use super::error::{FrontmatterError, fragment};
use super::types::{DELIMITER, Frontmatter, ParsedDocument};

/// Parse frontmatter from file content.
///
/// Frontmatter is delimited by `---` lines at the start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
///
/// Body text
/// ```
///
/// Content that does not start with `---` is returned as body with an empty
/// mapping, so plain markdown files are accepted.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterError> {
    if content.is_empty() {
        return Err(FrontmatterError::EmptyContent);
    }

    if !content.starts_with(DELIMITER) {
        return Ok(ParsedDocument {
            frontmatter: Frontmatter::default(),
            body: content.to_string(),
        });
    }

    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() < 3 {
        return Err(FrontmatterError::MissingDelimiter {
            reason: format!("expected at least 3 lines, found {}", lines.len()),
        });
    }

    if lines[0].trim() != DELIMITER {
        return Err(FrontmatterError::MissingDelimiter {
            reason: format!("opening line is '{}'", fragment(lines[0])),
        });
    }

    let close = find_closing_delimiter(&lines).ok_or_else(|| {
        FrontmatterError::MissingDelimiter {
            reason: "no closing '---' line".to_string(),
        }
    })?;

    let yaml = lines[1..close].join("\n");
    let fields = parse_block(&yaml)?;
    let body = lines[close + 1..].join("\n").trim().to_string();

    Ok(ParsedDocument { frontmatter: Frontmatter::new(fields), body })
}

/// Index of the first line after the opening one that is exactly `---`.
fn find_closing_delimiter(lines: &[&str]) -> Option<usize> {
    lines.iter().skip(1).position(|line| line.trim() == DELIMITER).map(|i| i + 1)
}

/// Parse the YAML between the delimiters into a mapping.
fn parse_block(yaml: &str) -> Result<Mapping, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let malformed =
        |source| FrontmatterError::MalformedMetadata { fragment: fragment(yaml), source };

    match serde_yaml::from_str::<Value>(yaml).map_err(malformed)? {
        // A block holding only comments.
        Value::Null => Ok(Mapping::new()),
        other => serde_yaml::from_value::<Mapping>(other).map_err(malformed),
    }
}
