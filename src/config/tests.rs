use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults_match_documented_policy() {
    let config = HookConfig::default();

    assert!(config.gitignore.enabled && config.gitignore.enforce);
    assert!(config.build.enabled && config.build.enforce);
    assert!(config.lowercase.enabled && !config.lowercase.enforce);
    assert!(config.git_reminder.enabled && !config.git_reminder.enforce);
    assert_eq!(config.git_reminder.settings.hours_threshold, 4);
}

#[test]
fn toml_overrides_merge_with_per_check_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commitguard.toml");
    fs::write(
        &path,
        r#"
[lowercase]
enforce = true

[build]
enabled = false

[gitReminder.settings]
hoursThreshold = 8
"#,
    )
    .unwrap();

    let config = HookConfig::load_from_file(&path).unwrap();

    assert!(config.lowercase.enforce);
    assert!(!config.build.enabled);
    // Untouched flag keeps its asymmetric default
    assert!(config.gitignore.enforce);
    assert_eq!(config.git_reminder.settings.hours_threshold, 8);
}

#[test]
fn json_format_is_selected_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commitguard.json");
    fs::write(
        &path,
        r#"{ "gitignore": { "enforce": false }, "gitReminder": { "enabled": false } }"#,
    )
    .unwrap();

    let config = HookConfig::load_from_file(&path).unwrap();

    assert!(!config.gitignore.enforce);
    assert!(!config.git_reminder.enabled);
}

#[test]
fn file_existence_probe_prefers_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("commitguard.toml"), "").unwrap();
    fs::write(dir.path().join("commitguard.json"), "{}").unwrap();

    let found = HookConfig::find_config_file(dir.path()).unwrap();
    assert_eq!(found.file_name().unwrap(), "commitguard.toml");
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("commitguard.toml"), "[build\nnot toml at all").unwrap();

    let config = HookConfig::load_or_default(None, dir.path());

    assert!(config.build.enforce);
    assert!(!config.lowercase.enforce);
}

#[test]
fn missing_config_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = HookConfig::load_or_default(None, dir.path());
    assert!(config.gitignore.enabled);
}
