//! Flat-file record store.
//!
//! Every record lives in its own `{id}-{slug}.md` file inside a directory
//! dedicated to one category. There is no index and no cache: each operation
//! re-scans the directory.

pub mod error;
pub mod naming;
pub mod record;
pub mod repository;
pub(crate) mod scan;

pub use error::StoreError;
pub use naming::{record_filename, slug};
pub use record::Record;
pub use repository::{FileStore, Listing, SkippedFile};
