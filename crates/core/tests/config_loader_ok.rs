use mdstore_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
data_root = "/tmp/records"
categories = ["skill", "project"]

[profiles.default.category_dirs]
skill = "{{data_root}}/my-skills"

[logging]
level = "debug"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.data_root.display().to_string(), "/tmp/records");
    assert_eq!(rc.categories, vec!["skill".to_string(), "project".to_string()]);
    assert_eq!(rc.logging.level, "debug");
    assert!(rc.logging.file.is_none());

    let skills = rc.category_dir("skill").unwrap();
    assert_eq!(skills.display().to_string(), "/tmp/records/my-skills");
    let projects = rc.category_dir("project").unwrap();
    assert_eq!(projects.display().to_string(), "/tmp/records/project");
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("mdstore/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
data_root = "/tmp/def"

[profiles.work]
data_root = "/tmp/work"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.data_root.display().to_string(), "/tmp/work");
    assert_eq!(rc.logging.level, "info");
}

#[test]
fn any_category_allowed_when_none_configured() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[profiles.default]\ndata_root = \"/tmp/r\"\n");

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    let dir = rc.category_dir("anything").unwrap();
    assert_eq!(dir.display().to_string(), "/tmp/r/anything");
}

#[test]
fn log_file_path_is_expanded() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
[profiles.default]
data_root = "/tmp/r"

[logging]
file = "{{data_root}}/mdstore.log"
file_level = "trace"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(
        rc.logging.file.as_ref().map(|p| p.display().to_string()),
        Some("/tmp/r/mdstore.log".to_string())
    );
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.level, "info");
}
