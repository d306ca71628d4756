//! Integration tests for the djstart binary.
//!
//! None of these reach the external generators: every `project` invocation
//! here fails validation or preset resolution first, which happens before
//! any subprocess is spawned.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn djstart() -> Command {
    Command::cargo_bin("djstart").unwrap()
}

#[test]
fn help_lists_subcommands() {
    djstart()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    djstart()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn project_help_shows_options() {
    djstart()
        .args(["project", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--preset"))
        .stdout(predicate::str::contains("--install"))
        .stdout(predicate::str::contains("--presets-dir"));
}

#[test]
fn missing_preset_exits_3_and_creates_nothing() {
    let presets = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    djstart()
        .current_dir(workdir.path())
        .args(["project", "my-blog", "posts"])
        .arg("--presets-dir")
        .arg(presets.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"));

    assert!(!workdir.path().join("my-blog").exists());
}

#[test]
fn non_empty_target_exits_2_untouched() {
    let presets = TempDir::new().unwrap();
    fs::create_dir(presets.path().join("base")).unwrap();

    let workdir = TempDir::new().unwrap();
    let target = workdir.path().join("my-blog");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("precious.txt"), "keep me").unwrap();

    djstart()
        .current_dir(workdir.path())
        .args(["project", "my-blog", "posts"])
        .arg("--presets-dir")
        .arg(presets.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not empty"));

    assert_eq!(
        fs::read_to_string(target.join("precious.txt")).unwrap(),
        "keep me"
    );
}

#[test]
fn invalid_project_name_exits_2() {
    let presets = TempDir::new().unwrap();
    fs::create_dir(presets.path().join("base")).unwrap();

    djstart()
        .current_dir(TempDir::new().unwrap().path())
        .args(["project", ".hidden", "posts"])
        .arg("--presets-dir")
        .arg(presets.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid name"));
}

#[test]
fn list_with_no_presets_succeeds() {
    let presets = TempDir::new().unwrap();

    djstart()
        .arg("list")
        .arg("--presets-dir")
        .arg(presets.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No presets"));
}

#[test]
fn list_shows_preset_bundle_contents() {
    let presets = TempDir::new().unwrap();
    let base = presets.path().join("base");
    fs::create_dir(&base).unwrap();
    fs::write(base.join("settings.py"), "DEBUG = True\n").unwrap();
    fs::write(base.join("requirements.txt"), "django\n").unwrap();

    djstart()
        .arg("list")
        .arg("--presets-dir")
        .arg(presets.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("base"))
        .stdout(predicate::str::contains("settings.py"))
        .stdout(predicate::str::contains("requirements.txt"));
}

#[test]
fn list_format_list_prints_names_only() {
    let presets = TempDir::new().unwrap();
    fs::create_dir(presets.path().join("api")).unwrap();
    fs::create_dir(presets.path().join("base")).unwrap();

    djstart()
        .args(["list", "--format", "list"])
        .arg("--presets-dir")
        .arg(presets.path())
        .assert()
        .success()
        .stdout(predicate::eq("api\nbase\n"));
}

#[test]
fn list_format_json_is_parseable() {
    let presets = TempDir::new().unwrap();
    let base = presets.path().join("base");
    fs::create_dir(&base).unwrap();
    fs::write(base.join(".env.template"), "SECRET_KEY={{SECRET_KEY}}\n").unwrap();

    let output = djstart()
        .args(["list", "--format", "json"])
        .arg("--presets-dir")
        .arg(presets.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["name"], "base");
    assert_eq!(parsed[0]["has_env_template"], true);
    assert_eq!(parsed[0]["has_settings"], false);
}

#[test]
fn completions_bash_mentions_the_binary() {
    djstart()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("djstart"));
}

#[test]
fn unreadable_explicit_config_exits_4() {
    djstart()
        .args(["--config", "/definitely/not/here.toml", "list"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration"));
}

#[test]
fn configured_default_preset_is_honoured() {
    let presets = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    let config = workdir.path().join("djstart.toml");
    fs::write(&config, "[defaults]\npreset = \"missing-from-disk\"\n").unwrap();

    // The configured preset does not exist, so resolution must fail with
    // its name, proving the config file was read and applied.
    djstart()
        .current_dir(workdir.path())
        .arg("--config")
        .arg(&config)
        .args(["project", "my-blog", "posts"])
        .arg("--presets-dir")
        .arg(presets.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("missing-from-disk"));
}

#[test]
fn conflicting_quiet_and_verbose_is_a_usage_error() {
    djstart()
        .args(["--quiet", "--verbose", "list"])
        .assert()
        .failure()
        .code(2);
}
