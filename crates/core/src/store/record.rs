//! The contract a type must satisfy to be persisted by [`FileStore`].
//!
//! [`FileStore`]: super::FileStore

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A typed record stored as one frontmatter file.
///
/// The body travels outside the metadata block, so implementors normally mark
/// their body field `#[serde(skip)]`. The store also removes
/// [`Record::BODY_FIELD`] from the serialized metadata before writing.
///
/// Fields missing from a file are filled from serde defaults, so record types
/// should carry `#[serde(default)]` on anything optional.
pub trait Record: Serialize + DeserializeOwned {
    /// Metadata key that must never be written to the frontmatter.
    const BODY_FIELD: &'static str = "body";

    /// Stable identity, unique within the category (e.g. `skill-001`).
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn body(&self) -> &str;

    fn set_body(&mut self, body: String);

    /// Tags consulted by search.
    fn tags(&self) -> &[String] {
        &[]
    }
}
