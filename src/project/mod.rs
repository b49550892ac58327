//! Project and workspace discovery
//!
//! Reads `package.json` manifests and walks the repository for member
//! packages. A package is worth building when its manifest declares a `build`
//! script and a UI-framework dependency, the discovery signal that separates
//! deployable apps from utility packages.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Manifest file name expected at each project root.
pub const MANIFEST_NAME: &str = "package.json";

/// Dependency names treated as the "this is an app" discovery signal.
pub const UI_FRAMEWORKS: &[&str] = &[
    "react",
    "preact",
    "vue",
    "svelte",
    "solid-js",
    "@angular/core",
    "next",
];

/// Subset of a `package.json` the hook pipeline reads. Unknown keys are
/// ignored here; the installer patches the raw JSON value instead so nothing
/// unrelated is dropped on rewrite.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub scripts: BTreeMap<String, String>,

    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,

    #[serde(default)]
    pub workspaces: Option<WorkspaceDecl>,
}

/// `workspaces` appears either as a bare glob array or wrapped in an object
/// with a `packages` key (yarn's extended form).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WorkspaceDecl {
    Globs(Vec<String>),
    Nested { packages: Vec<String> },
}

impl Manifest {
    /// Load the manifest from a project directory. A missing manifest is an
    /// environment error for callers that require one.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_NAME);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("No manifest found at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }

    pub fn build_script(&self) -> Option<&str> {
        self.scripts.get("build").map(String::as_str)
    }

    pub fn has_ui_framework(&self) -> bool {
        UI_FRAMEWORKS.iter().any(|framework| {
            self.dependencies.contains_key(*framework)
                || self.dev_dependencies.contains_key(*framework)
        })
    }
}

/// Whether the repository is a single buildable project or a multi-package
/// workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Single,
    Workspace,
}

/// Workspace detection: a `workspaces` manifest key or a workspace marker
/// file at the root.
pub fn detect_kind(root: &Path, manifest: &Manifest) -> ProjectKind {
    if manifest.workspaces.is_some()
        || root.join("pnpm-workspace.yaml").exists()
        || root.join("lerna.json").exists()
    {
        ProjectKind::Workspace
    } else {
        ProjectKind::Single
    }
}

/// A discovered member package.
#[derive(Debug)]
pub struct ProjectDescriptor {
    /// Display name: manifest `name` or the directory name.
    pub name: String,
    /// Absolute package directory.
    pub dir: PathBuf,
    /// Directory relative to the repository root, for staged-path matching.
    pub rel: PathBuf,
    pub manifest: Manifest,
}

impl ProjectDescriptor {
    pub fn has_build_script(&self) -> bool {
        self.manifest.build_script().is_some()
    }

    pub fn is_app(&self) -> bool {
        self.manifest.has_ui_framework()
    }
}

/// Walk `root` for member manifests, skipping any directory whose name is in
/// `exclude_dirs`. The exclusion set is a parameter rather than a constant so
/// callers can extend it from configuration. Results are sorted by relative
/// path, which fixes the build order.
pub fn discover_packages(root: &Path, exclude_dirs: &[String]) -> Result<Vec<ProjectDescriptor>> {
    let excluded: Vec<OsString> = exclude_dirs.iter().map(OsString::from).collect();

    // Exclusion is driven entirely by the parameter set; gitignore semantics
    // would silently hide member packages named like build artifacts.
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && excluded.iter().any(|name| entry.file_name() == name.as_os_str()))
        })
        .build();

    let mut packages = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("walker skipped entry: {err}");
                continue;
            }
        };

        if entry.file_name() != MANIFEST_NAME {
            continue;
        }
        let Some(dir) = entry.path().parent() else {
            continue;
        };
        // The root manifest describes the workspace itself, not a member.
        if dir == root {
            continue;
        }

        let manifest = match Manifest::load(dir) {
            Ok(manifest) => manifest,
            Err(err) => {
                tracing::debug!("unreadable manifest under {}: {err:#}", dir.display());
                continue;
            }
        };

        let rel = dir.strip_prefix(root).unwrap_or(dir).to_path_buf();
        let name = manifest
            .name
            .clone()
            .or_else(|| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| rel.display().to_string());

        packages.push(ProjectDescriptor {
            name,
            dir: dir.to_path_buf(),
            rel,
            manifest,
        });
    }

    packages.sort_by(|a, b| a.rel.cmp(&b.rel));
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(MANIFEST_NAME), content).unwrap();
    }

    #[test]
    fn workspace_detected_by_manifest_key_or_marker_file() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{ "name": "app", "workspaces": ["packages/*"] }"#);
        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(detect_kind(dir.path(), &manifest), ProjectKind::Workspace);

        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{ "name": "app" }"#);
        fs::write(dir.path().join("pnpm-workspace.yaml"), "packages:\n  - 'packages/*'\n")
            .unwrap();
        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(detect_kind(dir.path(), &manifest), ProjectKind::Workspace);

        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{ "name": "app" }"#);
        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(detect_kind(dir.path(), &manifest), ProjectKind::Single);
    }

    #[test]
    fn discovery_skips_excluded_directories_and_root_manifest() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{ "name": "root", "workspaces": ["packages/*"] }"#);
        write_manifest(
            &dir.path().join("packages/web"),
            r#"{ "name": "web", "scripts": { "build": "webpack" }, "dependencies": { "react": "^18" } }"#,
        );
        write_manifest(
            &dir.path().join("node_modules/leftpad"),
            r#"{ "name": "leftpad" }"#,
        );

        let packages =
            discover_packages(dir.path(), &["node_modules".to_string()]).unwrap();

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "web");
        assert!(packages[0].has_build_script());
        assert!(packages[0].is_app());
    }

    #[test]
    fn ui_framework_detection_covers_dev_dependencies() {
        let dir = TempDir::new().unwrap();
        write_manifest(
            dir.path(),
            r#"{ "name": "tool", "devDependencies": { "svelte": "^4" } }"#,
        );
        let manifest = Manifest::load(dir.path()).unwrap();
        assert!(manifest.has_ui_framework());
    }
}
