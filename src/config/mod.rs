//! Configuration management for commitguard
//!
//! Loads per-check `enabled`/`enforce` flags from an optional configuration
//! file next to the project manifest. Two formats are supported and selected
//! by an ordered file-existence check: `commitguard.toml` first, then
//! `commitguard.json`. A missing or malformed file never aborts a run: the
//! loader falls back to built-in defaults and continues.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file names probed in order. The first one that exists wins;
/// the process environment is never consulted for format selection.
pub const CONFIG_FILE_NAMES: &[&str] = &["commitguard.toml", "commitguard.json"];

/// Effective configuration: one entry per pipeline check.
///
/// Immutable once loaded; every check receives a shared reference instead of
/// reading global state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookConfig {
    pub gitignore: CheckConfig,
    pub lowercase: CheckConfig,
    pub build: CheckConfig,
    pub git_reminder: CheckConfig,
}

/// Per-check flags plus optional tuning knobs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckConfig {
    /// Whether the check runs at all.
    pub enabled: bool,

    /// Whether a finding blocks the commit (true) or only warns (false).
    pub enforce: bool,

    /// Check-specific settings; each check reads only the knobs it cares about.
    pub settings: CheckSettings,
}

/// Tuning knobs shared across checks. Every field has a default, so partial
/// configuration files stay valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSettings {
    /// Reminder check: flag when the last commit is older than this many hours.
    #[serde(default = "default_hours_threshold")]
    pub hours_threshold: u64,

    /// Build check: staged paths under any of these prefixes trigger builds of
    /// every buildable package, not just path-matched ones.
    #[serde(default = "default_shared_paths")]
    pub shared_paths: Vec<String>,

    /// Lowercase check: directory names excluded from scanning.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

fn default_hours_threshold() -> u64 {
    4
}

fn default_shared_paths() -> Vec<String> {
    ["packages/shared", "shared", "common", "libs"]
        .map(String::from)
        .to_vec()
}

fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", "dist", "build", "coverage", ".git"]
        .map(String::from)
        .to_vec()
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            hours_threshold: default_hours_threshold(),
            shared_paths: default_shared_paths(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

impl CheckConfig {
    fn enforcing() -> Self {
        Self {
            enabled: true,
            enforce: true,
            settings: CheckSettings::default(),
        }
    }

    fn advisory() -> Self {
        Self {
            enabled: true,
            enforce: false,
            settings: CheckSettings::default(),
        }
    }
}

impl Default for HookConfig {
    /// Built-in defaults: every check enabled; gitignore and build enforce,
    /// lowercase and the reminder only warn.
    fn default() -> Self {
        Self {
            gitignore: CheckConfig::enforcing(),
            lowercase: CheckConfig::advisory(),
            build: CheckConfig::enforcing(),
            git_reminder: CheckConfig::advisory(),
        }
    }
}

/// Partial check entry as written by users. Absent fields fall back to the
/// per-check defaults, which differ between checks, hence the two-step
/// deserialize-then-resolve shape instead of plain serde defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckOverrides {
    enabled: Option<bool>,
    enforce: Option<bool>,
    settings: Option<CheckSettings>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileConfig {
    #[serde(default)]
    gitignore: CheckOverrides,
    #[serde(default)]
    lowercase: CheckOverrides,
    #[serde(default)]
    build: CheckOverrides,
    #[serde(default)]
    git_reminder: CheckOverrides,
}

impl CheckOverrides {
    fn apply(self, base: CheckConfig) -> CheckConfig {
        CheckConfig {
            enabled: self.enabled.unwrap_or(base.enabled),
            enforce: self.enforce.unwrap_or(base.enforce),
            settings: self.settings.unwrap_or(base.settings),
        }
    }
}

impl FileConfig {
    fn resolve(self) -> HookConfig {
        let defaults = HookConfig::default();
        HookConfig {
            gitignore: self.gitignore.apply(defaults.gitignore),
            lowercase: self.lowercase.apply(defaults.lowercase),
            build: self.build.apply(defaults.build),
            git_reminder: self.git_reminder.apply(defaults.git_reminder),
        }
    }
}

impl HookConfig {
    /// Find a configuration file in `root` using the ordered existence check.
    pub fn find_config_file(root: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.exists())
    }

    /// Load configuration from an explicit file path. Format is chosen by the
    /// file extension, defaulting to TOML.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file_config: FileConfig = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        };

        Ok(file_config.resolve())
    }

    /// Load configuration for a repository root, falling back to defaults on
    /// any failure. `explicit` (from `--config`) takes precedence over the
    /// file-existence probe.
    pub fn load_or_default(explicit: Option<&Path>, root: &Path) -> Self {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(root),
        };

        match path {
            Some(path) => Self::load_from_file(&path).unwrap_or_else(|err| {
                tracing::debug!("config fallback to defaults: {err:#}");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests;
