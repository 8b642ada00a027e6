use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
data_root = "/tmp/r"
categories = ["skill", "project"]

[profiles.default.category_dirs]
skill = "{{data_root}}/skills"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mds"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mds doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("data_root: /tmp/r"))
        .stdout(predicate::str::contains("category.skill: /tmp/r/skills"))
        .stdout(predicate::str::contains("category.project: /tmp/r/project"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_dir = tmp.path().join("mdstore");
    let cfg_path = cfg_dir.join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
data_root = "/tmp/r"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mds"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mds doctor"))
        .stdout(predicate::str::contains("categories: (any)"));
}
