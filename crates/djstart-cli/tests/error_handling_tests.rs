//! Tests for error messages and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn missing_preset_error_has_suggestions() {
    let presets = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("djstart").unwrap();
    cmd.current_dir(workdir.path())
        .args(["project", "my-blog", "posts", "--preset", "fancy"])
        .arg("--presets-dir")
        .arg(presets.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("fancy"))
        .stderr(predicate::str::contains("djstart list"))
        .stderr(predicate::str::contains("--presets-dir"));
}

#[test]
fn invalid_name_error_explains_the_rule() {
    let presets = TempDir::new().unwrap();
    std::fs::create_dir(presets.path().join("base")).unwrap();
    let workdir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("djstart").unwrap();
    cmd.current_dir(workdir.path())
        .args(["project", "a/b", "posts"])
        .arg("--presets-dir")
        .arg(presets.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn errors_are_printed_even_in_quiet_mode() {
    let presets = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("djstart").unwrap();
    cmd.current_dir(workdir.path())
        .args(["--quiet", "project", "my-blog", "posts"])
        .arg("--presets-dir")
        .arg(presets.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
