//! Filename conventions for stored records.

/// Maximum slug length, in characters.
const SLUG_MAX_LEN: usize = 50;

/// Slug used when a title has no usable characters.
const UNTITLED: &str = "untitled";

/// Extension shared by every record file.
pub const EXTENSION: &str = ".md";

/// Derive a filesystem-safe slug from a title.
///
/// # Examples
/// ```
/// use mdstore_core::store::slug;
///
/// assert_eq!(slug("C++ Programming!"), "c-programming");
/// assert_eq!(slug("snake_case title"), "snake-case-title");
/// assert_eq!(slug(""), "untitled");
/// ```
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());

    for c in title.to_lowercase().chars() {
        let c = if c == ' ' || c == '_' { '-' } else { c };
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            continue;
        }
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }

    let truncated: String = out.trim_matches('-').chars().take(SLUG_MAX_LEN).collect();
    let slug = truncated.trim_end_matches('-');

    if slug.is_empty() { UNTITLED.to_string() } else { slug.to_string() }
}

/// File name for a record: `{id}-{slug(title)}.md`.
///
/// # Examples
/// ```
/// use mdstore_core::store::record_filename;
///
/// assert_eq!(record_filename("skill-001", "Python"), "skill-001-python.md");
/// ```
pub fn record_filename(id: &str, title: &str) -> String {
    format!("{}-{}{}", id, slug(title), EXTENSION)
}

/// Whether `name` matches `{id}-*.md`.
pub fn matches_id(name: &str, id: &str) -> bool {
    name.strip_suffix(EXTENSION)
        .and_then(|stem| stem.strip_prefix(id))
        .is_some_and(|rest| rest.starts_with('-'))
}

/// Whether `name` matches `*-*.md`.
pub fn is_record_file(name: &str) -> bool {
    name.strip_suffix(EXTENSION).is_some_and(|stem| stem.contains('-'))
}
