use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mds"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL mds doctor"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_fails_on_bad_version() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "version = 3\n[profiles.default]\ndata_root = \"/tmp/r\"\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mds"));
    cmd.args(["--config", cfg.to_str().unwrap(), "doctor"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL mds doctor"))
        .stdout(predicate::str::contains("version 3 is unsupported"));
}
