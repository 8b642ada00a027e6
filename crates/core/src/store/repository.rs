//! Generic CRUD over a directory of frontmatter files.

use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::StoreError;
use super::naming::{is_record_file, matches_id, record_filename};
use super::record::Record;
use super::scan::list_files;
use crate::frontmatter::serializer::into_mapping;
use crate::frontmatter::{FrontmatterError, parse, serialize_mapping};
use crate::ids;

type Result<T> = std::result::Result<T, StoreError>;

/// A file that [`FileStore::get_all_with_report`] could not load.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Records loaded from a category, plus the files that had to be skipped.
#[derive(Debug, Clone)]
pub struct Listing<R> {
    pub records: Vec<R>,
    pub skipped: Vec<SkippedFile>,
}

impl<R> Listing<R> {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Store for one category of records, backed by one directory.
///
/// There is no locking: two processes writing the same directory can race,
/// e.g. both passing the existence check in [`FileStore::create`]. A
/// duplicate left behind by such a race, or by an interrupted
/// [`FileStore::update`], surfaces as [`StoreError::AmbiguousId`] on the
/// next lookup.
#[derive(Debug, Clone)]
pub struct FileStore<R> {
    dir: PathBuf,
    category: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> FileStore<R> {
    /// Open a store over `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>, category: impl Into<String>) -> Result<Self> {
        let dir = dir.into();
        let category = category.into();

        if dir.as_os_str().is_empty() {
            return Err(StoreError::InvalidConfig("directory path is empty".to_string()));
        }
        if category.trim().is_empty() {
            return Err(StoreError::InvalidConfig("category name is empty".to_string()));
        }

        fs::create_dir_all(&dir)
            .map_err(|source| StoreError::Io { path: dir.clone(), source })?;

        debug!(dir = %dir.display(), category = %category, "opened record store");
        Ok(Self { dir, category, _record: PhantomData })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Write a new record. Fails if any file already exists for its id.
    pub fn create(&self, record: &R) -> Result<PathBuf> {
        let id = record_id(record)?;

        if let Some(existing) = self.find(id)?.into_iter().next() {
            return Err(StoreError::AlreadyExists { id: id.to_string(), path: existing });
        }

        let path = self.dir.join(record_filename(id, record.title()));
        let content = encode(record, &path)?;
        write_file(&path, &content)?;

        debug!(id, path = %path.display(), "created record");
        Ok(path)
    }

    /// Load a record's metadata; the body is left empty.
    pub fn get_by_id(&self, id: &str) -> Result<R> {
        let path = self.locate(id)?;
        read_record(&path, false)
    }

    /// Load a record including its body.
    pub fn get_by_id_with_body(&self, id: &str) -> Result<R> {
        let path = self.locate(id)?;
        read_record(&path, true)
    }

    /// Every record in the category, without bodies, in file-name order.
    ///
    /// Files that cannot be read or parsed are skipped; see
    /// [`FileStore::get_all_with_report`] to find out which.
    pub fn get_all(&self) -> Result<Vec<R>> {
        Ok(self.get_all_with_report()?.records)
    }

    /// Like [`FileStore::get_all`], also reporting the skipped files.
    pub fn get_all_with_report(&self) -> Result<Listing<R>> {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for path in list_files(&self.dir, is_record_file)? {
            match read_record(&path, false) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable record");
                    skipped.push(SkippedFile { path, reason: e.to_string() });
                }
            }
        }

        Ok(Listing { records, skipped })
    }

    /// Rewrite an existing record, renaming its file if the title changed.
    ///
    /// The new file is written and checked before the old one is removed. If
    /// the removal fails the new file is deleted again (best effort) and the
    /// removal error is returned.
    pub fn update(&self, record: &R) -> Result<PathBuf> {
        let id = record_id(record)?;
        let old_path = self.locate(id)?;
        let new_path = self.dir.join(record_filename(id, record.title()));

        let content = encode(record, &new_path)?;
        write_file(&new_path, &content)?;
        fs::metadata(&new_path)
            .map_err(|source| StoreError::Io { path: new_path.clone(), source })?;

        if new_path != old_path {
            retire_old_file(&old_path, &new_path, |p| fs::remove_file(p))?;
            debug!(
                id,
                from = %old_path.display(),
                to = %new_path.display(),
                "renamed record"
            );
        }

        debug!(id, path = %new_path.display(), "updated record");
        Ok(new_path)
    }

    /// Remove the file holding `id`.
    pub fn delete(&self, id: &str) -> Result<()> {
        let path = self.locate(id)?;
        fs::remove_file(&path).map_err(|source| StoreError::Io { path: path.clone(), source })?;
        debug!(id, path = %path.display(), "deleted record");
        Ok(())
    }

    /// Records whose title or any tag contains `query`, ignoring case.
    ///
    /// An empty query returns everything.
    pub fn search(&self, query: &str) -> Result<Vec<R>> {
        let records = self.get_all()?;
        if query.is_empty() {
            return Ok(records);
        }

        let needle = query.to_lowercase();
        Ok(records.into_iter().filter(|r| matches_query(r, &needle)).collect())
    }

    /// Whether at least one file exists for `id`.
    ///
    /// Does not detect duplicates; use [`FileStore::locate`] for that.
    pub fn exists(&self, id: &str) -> Result<bool> {
        require_id(id)?;
        Ok(!self.find(id)?.is_empty())
    }

    /// Path of the unique file holding `id`.
    pub fn locate(&self, id: &str) -> Result<PathBuf> {
        require_id(id)?;

        let mut matches = self.find(id)?;
        match matches.len() {
            0 => Err(StoreError::NotFound {
                category: self.category.clone(),
                id: id.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(StoreError::AmbiguousId { id: id.to_string(), matches }),
        }
    }

    /// Number of record files in the directory.
    pub fn count(&self) -> Result<usize> {
        Ok(list_files(&self.dir, is_record_file)?.len())
    }

    /// Next free `{category}-NNN` id.
    pub fn next_id(&self) -> Result<String> {
        ids::next_sequential_id(&self.category, &self.dir)
    }

    fn find(&self, id: &str) -> Result<Vec<PathBuf>> {
        list_files(&self.dir, |name| matches_id(name, id))
    }
}

/// Why `id` cannot name a file inside the store directory, if it cannot.
fn id_problem(id: &str) -> Option<&'static str> {
    if id.trim().is_empty() {
        Some("id must not be empty")
    } else if id.contains(['/', '\\', '\0']) {
        Some("id must not contain path separators")
    } else if id.starts_with('.') || id.contains("..") {
        Some("id must not start with '.' or contain '..'")
    } else {
        None
    }
}

fn require_id(id: &str) -> Result<()> {
    match id_problem(id) {
        Some(problem) => Err(StoreError::InvalidArgument(format!("{problem}: '{id}'"))),
        None => Ok(()),
    }
}

fn record_id<R: Record>(record: &R) -> Result<&str> {
    let id = record.id();
    match id_problem(id) {
        Some(problem) => Err(StoreError::InvalidRecord(format!("{problem}: '{id}'"))),
        None => Ok(id),
    }
}

fn matches_query<R: Record>(record: &R, needle: &str) -> bool {
    record.title().to_lowercase().contains(needle)
        || record.tags().iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Render a record to file content, keeping the body out of the metadata.
fn encode<R: Record>(record: &R, path: &Path) -> Result<String> {
    let format = |source| StoreError::Format { path: path.to_path_buf(), source };

    let value = serde_yaml::to_value(record)
        .map_err(|e| format(FrontmatterError::Serialize(e)))?;
    let mut mapping = into_mapping(value).map_err(format)?;
    mapping.remove(R::BODY_FIELD);

    serialize_mapping(&mapping, record.body()).map_err(format)
}

fn read_record<R: Record>(path: &Path, with_body: bool) -> Result<R> {
    let format = |source| StoreError::Format { path: path.to_path_buf(), source };

    let content = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    let doc = parse(&content).map_err(format)?;

    let mut record: R = doc.frontmatter.decode().map_err(format)?;
    record.set_body(if with_body { doc.body } else { String::new() });
    Ok(record)
}

/// Remove `old` after a rename. On failure `new` is removed again so the
/// record is left under its previous name.
fn retire_old_file<F>(old: &Path, new: &Path, remove: F) -> Result<()>
where
    F: Fn(&Path) -> io::Result<()>,
{
    if let Err(source) = remove(old) {
        if let Err(cleanup) = remove(new) {
            warn!(
                path = %new.display(),
                error = %cleanup,
                "failed to clean up renamed record; both files remain"
            );
        }
        return Err(StoreError::Io { path: old.to_path_buf(), source });
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
