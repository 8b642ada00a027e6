//! Sequential id allocation for record categories.
//!
//! Ids are the category name plus a zero-padded counter (e.g. "skill-007").
//! The next id is derived from the files already on disk, so the directory is
//! the only source of truth.

use std::path::Path;

use regex::Regex;

use crate::store::StoreError;
use crate::store::naming::EXTENSION;

/// Format a sequential id.
///
/// # Examples
/// ```
/// use mdstore_core::ids::format_sequential_id;
///
/// assert_eq!(format_sequential_id("skill", 1), "skill-001");
/// assert_eq!(format_sequential_id("project", 42), "project-042");
/// assert_eq!(format_sequential_id("note", 1234), "note-1234");
/// ```
pub fn format_sequential_id(category: &str, counter: u32) -> String {
    format!("{}-{:03}", category, counter)
}

/// Split a sequential id into category and counter.
///
/// The counter is taken after the last hyphen, so categories may contain
/// hyphens themselves.
///
/// # Examples
/// ```
/// use mdstore_core::ids::parse_sequential_id;
///
/// assert_eq!(parse_sequential_id("skill-001"), Some(("skill".to_string(), 1)));
/// assert_eq!(parse_sequential_id("side-project-012"), Some(("side-project".to_string(), 12)));
/// assert_eq!(parse_sequential_id("invalid"), None);
/// ```
pub fn parse_sequential_id(id: &str) -> Option<(String, u32)> {
    let (category, counter) = id.rsplit_once('-')?;
    if category.is_empty() || counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let counter = counter.parse::<u32>().ok()?;
    Some((category.to_string(), counter))
}

/// Next id for `category`, one past the highest counter found in `dir`.
///
/// Files are matched as `{category}-*.md` and their counters read with
/// `{category}-(\d+)`. Names without a counter are ignored and gaps are never
/// reused. A missing directory yields the first id.
pub fn next_sequential_id(category: &str, dir: &Path) -> Result<String, StoreError> {
    if category.trim().is_empty() {
        return Err(StoreError::InvalidArgument("category must not be empty".to_string()));
    }
    if !dir.exists() {
        return Ok(format_sequential_id(category, 1));
    }

    let pattern = Regex::new(&format!(r"^{}-(\d+)", regex::escape(category)))
        .map_err(|e| StoreError::InvalidArgument(format!("bad category '{category}': {e}")))?;
    let prefix = format!("{category}-");

    let files = crate::store::scan::list_files(dir, |name| {
        name.starts_with(&prefix) && name.ends_with(EXTENSION)
    })?;

    let max = files
        .iter()
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
        .filter_map(|name| pattern.captures(name))
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    let next = max.checked_add(1).ok_or_else(|| {
        StoreError::InvalidArgument(format!(
            "no sequential ids left in category '{category}' after {}",
            format_sequential_id(category, max)
        ))
    })?;
    Ok(format_sequential_id(category, next))
}
