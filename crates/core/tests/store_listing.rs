use mdstore_core::Entry;
use mdstore_core::frontmatter::FrontmatterError;
use mdstore_core::store::{FileStore, Record, StoreError};
use std::fs;
use tempfile::tempdir;

fn open(dir: &std::path::Path) -> FileStore<Entry> {
    FileStore::new(dir, "skill").unwrap()
}

fn titles(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.title()).collect()
}

#[test]
fn get_all_lists_records_without_bodies() {
    let tmp = tempdir().unwrap();
    let store = open(tmp.path());

    store.create(&Entry::new("skill-002", "Rust").with_body("body two")).unwrap();
    store.create(&Entry::new("skill-001", "Python").with_body("body one")).unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(titles(&all), vec!["Python", "Rust"]);
    assert!(all.iter().all(|e| e.body.is_empty()));
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn get_all_ignores_non_record_files() {
    let tmp = tempdir().unwrap();
    let store = open(tmp.path());

    store.create(&Entry::new("skill-001", "Python")).unwrap();
    fs::write(tmp.path().join("README.md"), "# readme").unwrap();
    fs::write(tmp.path().join("skill-009-notes.txt"), "not markdown").unwrap();
    fs::create_dir(tmp.path().join("sub-dir.md")).unwrap();

    let listing = store.get_all_with_report().unwrap();
    assert_eq!(titles(&listing.records), vec!["Python"]);
    assert_eq!(listing.skipped_count(), 0);
}

#[test]
fn get_all_skips_corrupt_files_and_reports_them() {
    let tmp = tempdir().unwrap();
    let store = open(tmp.path());

    store.create(&Entry::new("skill-001", "Python")).unwrap();
    store.create(&Entry::new("skill-003", "Go")).unwrap();
    fs::write(tmp.path().join("skill-002-broken.md"), "---\ntitle: [broken\n---\n").unwrap();
    fs::write(tmp.path().join("skill-004-empty.md"), "").unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(titles(&all), vec!["Python", "Go"]);

    let listing = store.get_all_with_report().unwrap();
    assert_eq!(listing.records.len(), 2);
    assert_eq!(listing.skipped_count(), 2);
    assert!(listing.skipped[0].path.ends_with("skill-002-broken.md"));
    assert!(listing.skipped[1].reason.contains("empty"));
}

#[test]
fn plain_markdown_files_are_listed() {
    let tmp = tempdir().unwrap();
    let store = open(tmp.path());

    fs::write(tmp.path().join("skill-001-legacy.md"), "# Legacy\n\nNo frontmatter here.\n")
        .unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "");

    let full = store.get_by_id_with_body("skill-001").unwrap();
    assert!(full.body.starts_with("# Legacy"));
}

#[test]
fn search_matches_title_and_tags_ignoring_case() {
    let tmp = tempdir().unwrap();
    let store = open(tmp.path());

    store.create(&Entry::new("skill-001", "Go Programming").with_tags(["backend"])).unwrap();
    store.create(&Entry::new("skill-002", "Cooking").with_tags(["Weekend"])).unwrap();

    for query in ["go", "GO", "backend", "BackEnd", "prog"] {
        let found = store.search(query).unwrap();
        assert_eq!(titles(&found), vec!["Go Programming"], "query {query:?}");
    }

    assert!(store.search("rust").unwrap().is_empty());
    assert_eq!(titles(&store.search("end").unwrap()), vec!["Go Programming", "Cooking"]);
}

#[test]
fn empty_search_returns_everything() {
    let tmp = tempdir().unwrap();
    let store = open(tmp.path());

    store.create(&Entry::new("skill-001", "Python")).unwrap();
    store.create(&Entry::new("skill-002", "Rust")).unwrap();

    assert_eq!(store.search("").unwrap().len(), 2);
}

#[test]
fn extra_fields_survive_update() {
    let tmp = tempdir().unwrap();
    let store = open(tmp.path());

    fs::write(
        tmp.path().join("skill-001-python.md"),
        "---\nid: skill-001\ntitle: Python\nlevel: expert\nlinks:\n  docs: https://docs.python.org\n---\n\nBody\n",
    )
    .unwrap();

    let mut entry = store.get_by_id_with_body("skill-001").unwrap();
    entry.title = "Python 3".to_string();
    store.update(&entry).unwrap();

    let content = fs::read_to_string(tmp.path().join("skill-001-python-3.md")).unwrap();
    assert!(content.contains("level: expert"));
    assert!(content.contains("docs.python.org"));
    assert!(content.ends_with("\n\nBody\n"));
}

#[test]
fn delimiter_in_a_value_fails_without_touching_disk() {
    let tmp = tempdir().unwrap();
    let store = open(tmp.path());

    let mut entry = Entry::new("skill-001", "Python");
    entry.set("notes", "a\n---\nb");
    let err = store.create(&entry).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Format { source: FrontmatterError::DelimiterInMetadata { .. }, .. }
    ));
    assert!(err.hint().is_some());
    assert_eq!(store.count().unwrap(), 0);

    store.create(&Entry::new("skill-001", "Python")).unwrap();
    let mut entry = store.get_by_id_with_body("skill-001").unwrap();
    entry.set("notes", "a\n---\nb");
    assert!(store.update(&entry).is_err());

    let reread = store.get_by_id("skill-001").unwrap();
    assert_eq!(reread.title(), "Python");
    assert!(reread.get("notes").is_none());
}
