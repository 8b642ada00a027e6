//! Store error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

use crate::frontmatter::FrontmatterError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid store configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("{category} record '{id}' not found")]
    NotFound { category: String, id: String },

    #[error("record '{id}' already exists at {path}")]
    AlreadyExists { id: String, path: PathBuf },

    #[error("record '{id}' matches {} files: {}", .matches.len(), join_paths(.matches))]
    AmbiguousId { id: String, matches: Vec<PathBuf> },

    #[error("invalid record file {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Suggested recovery action for the user, when one exists.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotFound { category, .. } => {
                Some(format!("run 'mds list {category}' to see valid ids"))
            }
            Self::AlreadyExists { .. } => {
                Some("pick another id, or update the existing record instead".to_string())
            }
            Self::AmbiguousId { id, .. } => Some(format!(
                "keep exactly one file starting with '{id}-' and remove the others"
            )),
            Self::Format { source: FrontmatterError::DelimiterInMetadata { .. }, .. } => {
                Some("remove lines consisting only of '---' from metadata values".to_string())
            }
            Self::Format { path, .. } => {
                Some(format!("fix or remove {} by hand", path.display()))
            }
            _ => None,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
