//! Errors raised while decoding or encoding frontmatter.

use thiserror::Error;

/// Errors that can occur during frontmatter parsing or serialization.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("content is empty")]
    EmptyContent,

    #[error("missing frontmatter delimiter: {reason}")]
    MissingDelimiter { reason: String },

    #[error("malformed frontmatter near '{fragment}': {source}")]
    MalformedMetadata {
        fragment: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("metadata is nil")]
    NilMetadata,

    #[error("metadata must serialize to a mapping, got {0}")]
    NotAMapping(&'static str),

    #[error("metadata value on line {line} would read back as a closing delimiter")]
    DelimiterInMetadata { line: usize },

    #[error("failed to serialize metadata: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Shorten content for inclusion in error messages.
pub(crate) fn fragment(content: &str) -> String {
    const MAX: usize = 60;
    let first = content.trim().lines().next().unwrap_or_default();
    if first.chars().count() > MAX {
        let cut: String = first.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}
