use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn wafer_cmd(revision: Option<&str>) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wafer-manifests"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    match revision {
        Some(rev) => cmd.env("PRIMITIVE_GIT_SHA", rev),
        None => cmd.env_remove("PRIMITIVE_GIT_SHA"),
    };
    cmd
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("read {name}: {e}"))
}

fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).expect("read dir").count()
}

#[test]
fn writes_both_manifests_with_revision() {
    let out = TempDir::new().expect("out");

    wafer_cmd(Some("abc123"))
        .arg(out.path())
        .assert()
        .success()
        .stdout(contains("wafer_system_core.xml"))
        .stdout(contains("wafer_frameworks_base.xml"));

    assert_eq!(entry_count(out.path()), 2);
    assert!(read(out.path(), "wafer_frameworks_base.xml").contains(r#"revision="abc123""#));
    assert!(read(out.path(), "wafer_system_core.xml").contains(r#"revision="wafer""#));
}

#[test]
fn second_run_is_byte_identical() {
    let out = TempDir::new().expect("out");
    wafer_cmd(Some("cafe01")).arg(out.path()).assert().success();
    let core = fs::read(out.path().join("wafer_system_core.xml")).unwrap();
    let base = fs::read(out.path().join("wafer_frameworks_base.xml")).unwrap();

    wafer_cmd(Some("cafe01")).arg(out.path()).assert().success();
    assert_eq!(core, fs::read(out.path().join("wafer_system_core.xml")).unwrap());
    assert_eq!(base, fs::read(out.path().join("wafer_frameworks_base.xml")).unwrap());
}

#[test]
fn missing_revision_fails_before_writing() {
    let out = TempDir::new().expect("out");

    wafer_cmd(None)
        .arg(out.path())
        .assert()
        .failure()
        .stderr(contains("PRIMITIVE_GIT_SHA"));

    assert_eq!(entry_count(out.path()), 0, "no file may be written");
}

#[test]
fn missing_directory_fails() {
    let parent = TempDir::new().expect("parent");
    let missing = parent.path().join("nope");

    wafer_cmd(Some("abc123"))
        .arg(&missing)
        .assert()
        .failure()
        .stderr(contains("wafer_system_core.xml"));

    assert!(!missing.exists());
    assert_eq!(entry_count(parent.path()), 0);
}

#[test]
fn missing_path_argument_is_usage_error() {
    wafer_cmd(Some("abc123"))
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Usage"));
}

#[test]
fn path_is_the_only_accepted_argument() {
    for flag in ["--dry-run", "--check", "--verbose", "-v", "--version", "-V"] {
        let out = TempDir::new().expect("out");
        wafer_cmd(Some("abc123"))
            .arg(out.path())
            .arg(flag)
            .assert()
            .failure()
            .code(2);
        assert_eq!(entry_count(out.path()), 0, "{flag} must not generate");
    }
}

#[test]
fn missing_revision_exits_non_zero_without_usage_error() {
    let out = TempDir::new().expect("out");
    wafer_cmd(None).arg(out.path()).assert().code(1);
}
