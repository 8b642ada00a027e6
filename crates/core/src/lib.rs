//! Typed records persisted as markdown files with YAML frontmatter.
//!
//! - [`frontmatter`]: convert file content to metadata plus body and back
//! - [`store`]: one directory per category, one file per record
//! - [`ids`]: sequential `{category}-NNN` ids
//! - [`config`]: profile-based configuration for the `mds` binary

pub mod config;
pub mod entry;
pub mod frontmatter;
pub mod ids;
pub mod store;

pub use entry::Entry;
pub use store::{FileStore, Record, StoreError};
