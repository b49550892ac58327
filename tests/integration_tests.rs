//! Integration tests for the commitguard CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git must be available for integration tests");
    assert!(status.status.success(), "git {args:?} failed");
}

fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test"]);
}

/// Disable every check except the listed ones (TOML fragment per check).
fn write_config(dir: &Path, body: &str) {
    let mut content = String::new();
    for check in ["gitignore", "lowercase", "build", "gitReminder"] {
        if !body.contains(&format!("[{check}]")) {
            content.push_str(&format!("[{check}]\nenabled = false\n\n"));
        }
    }
    content.push_str(body);
    fs::write(dir.join("commitguard.toml"), content).unwrap();
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git hook pipeline"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("commitguard"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test init writes a starter config and refuses to overwrite it
#[test]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path()).arg("init").assert().success();

    let config_path = temp_dir.path().join("commitguard.toml");
    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[gitignore]"));
    assert!(content.contains("hoursThreshold"));

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

/// Test hook installation and marker-aware uninstall
#[test]
fn test_install_and_uninstall_hooks() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path()).arg("install").assert().success();

    for hook in ["pre-commit", "pre-push"] {
        let path = temp_dir.path().join(".git/hooks").join(hook);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Installed by commitguard"));
        assert!(content.contains("COMMITGUARD_SKIP"));
    }

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path()).arg("uninstall").assert().success();
    assert!(!temp_dir.path().join(".git/hooks/pre-commit").exists());
}

/// Test a foreign hook script survives uninstall
#[test]
fn test_uninstall_leaves_foreign_hooks() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let hooks_dir = temp_dir.path().join(".git/hooks");
    fs::create_dir_all(&hooks_dir).unwrap();
    fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\nexit 0\n").unwrap();

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path()).arg("uninstall").assert().success();
    assert!(hooks_dir.join("pre-commit").exists());
}

/// Test end-to-end gitignore audit: all default patterns land under one
/// header and the file is staged
#[test]
fn test_gitignore_audit_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["check", "gitignore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 25 missing pattern(s)"));

    let content = fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap();
    assert!(content.contains("# Added automatically by commitguard"));
    assert!(content.contains("node_modules"));
    assert!(content.contains(".env"));
    assert_eq!(
        content.matches("# Added automatically").count(),
        1,
        "exactly one generated header"
    );

    // The auditor stages its fix
    let staged = std::process::Command::new("git")
        .args(["status", "--porcelain"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&staged.stdout).contains("A  .gitignore"));

    // Re-running is a no-op
    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["check", "gitignore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("covers all required patterns"));
}

/// Test the lowercase check blocks an uppercase staged filename in enforce
/// mode and only warns otherwise
#[test]
fn test_lowercase_enforcement_modes() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    fs::write(temp_dir.path().join("Foo.js"), "import x from './Bar/baz';\n").unwrap();
    git(temp_dir.path(), &["add", "Foo.js"]);

    write_config(temp_dir.path(), "[lowercase]\nenabled = true\nenforce = true\n");
    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["run", "pre-commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lowercase"));

    write_config(temp_dir.path(), "[lowercase]\nenabled = true\nenforce = false\n");
    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["run", "pre-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uppercase"));
}

/// Test the pipeline succeeds with every check disabled
#[test]
fn test_pipeline_with_all_checks_disabled() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    write_config(temp_dir.path(), "");

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["run", "pre-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pre-commit checks passed"));
}

/// Test the recursion guard short-circuits the pipeline
#[test]
fn test_recursion_guard_skips_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    // Deliberately not a git repository: the guard must win before discovery.
    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("COMMITGUARD_SKIP", "1")
        .args(["run", "pre-commit"])
        .assert()
        .success();
}

/// Test unknown hook names are rejected
#[test]
fn test_unknown_hook_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["run", "post-merge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown hook"));
}

/// Test config validate surfaces parse errors that the pipeline would
/// silently swallow
#[test]
fn test_config_validate_reports_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    fs::write(temp_dir.path().join("commitguard.toml"), "[build\nbroken").unwrap();

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["config", "validate"])
        .assert()
        .failure();

    // The pipeline itself keeps working on defaults with the same file
    write_config(temp_dir.path(), "");
    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["run", "pre-commit"])
        .assert()
        .success();
}

/// Test status renders the main table
#[test]
fn test_status_output() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("pre-commit hook"));
}

/// Test config show renders the effective configuration
#[test]
fn test_config_show() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let mut cmd = Command::cargo_bin("commitguard").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hoursThreshold"));
}
