//! Single-level directory scanning.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::StoreError;

/// Regular files directly inside `dir` whose name satisfies `keep`, sorted by
/// file name.
pub(crate) fn list_files<F>(dir: &Path, keep: F) -> Result<Vec<PathBuf>, StoreError>
where
    F: Fn(&str) -> bool,
{
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| StoreError::Io {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if keep(name) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
