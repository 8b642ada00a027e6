//! Frontmatter parsing and serialization.
//!
//! This module converts between the on-disk record format:
//! ```markdown
//! ---
//! id: skill-001
//! title: Python
//! ---
//!
//! Free-text body.
//! ```
//! and an ordered metadata mapping plus a body string.

pub mod error;
pub mod parser;
pub mod serializer;
pub mod types;

pub use error::FrontmatterError;
pub use parser::parse;
pub use serializer::{serialize, serialize_mapping};
pub use types::{DELIMITER, Frontmatter, ParsedDocument};
