//! Install git hooks and wire up manifest scripts
//!
//! Writes the managed hook scripts into `.git/hooks` and patches the project
//! manifest's `scripts` map so the checks are reachable by name. Only the
//! keys this tool owns are touched; everything else in the manifest survives
//! the rewrite byte-for-byte in content and order.

use crate::cli::Output;
use crate::git::GitRepo;
use crate::hooks::{MANAGED_HOOKS, hook_script};
use crate::project::MANIFEST_NAME;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Script entries owned by commitguard.
const MANAGED_SCRIPTS: &[(&str, &str)] = &[
    ("prepare", "commitguard install"),
    ("check-gitignore", "commitguard check gitignore"),
    ("check-lowercase", "commitguard check lowercase"),
    ("git-reminder", "commitguard check reminder"),
];

/// Execute the install command.
pub async fn execute(output: &Output) -> Result<()> {
    output.header("Installing commitguard hooks");

    let repo = GitRepo::discover()?;
    let root = repo.workdir()?;

    for hook in MANAGED_HOOKS {
        repo.install_hook(hook, &hook_script(hook))?;
        output.success(&format!("Installed {hook} hook"));
    }

    match patch_manifest(&root)? {
        true => output.success(&format!("Wired scripts into {MANIFEST_NAME}")),
        false => output.info(&format!("No {MANIFEST_NAME} found, skipped script wiring")),
    }

    output.blank_line();
    output.info("Run 'commitguard run pre-commit' to try the pipeline now");
    Ok(())
}

/// Insert or update the managed script entries, preserving every unrelated
/// key. Returns false when there is no manifest to patch.
fn patch_manifest(root: &Path) -> Result<bool> {
    let path = root.join(MANIFEST_NAME);
    if !path.exists() {
        return Ok(false);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut manifest: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let object = manifest
        .as_object_mut()
        .with_context(|| format!("{} is not a JSON object", path.display()))?;
    let scripts = object
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    let scripts = scripts
        .as_object_mut()
        .with_context(|| format!("'scripts' in {} is not an object", path.display()))?;

    for (key, command) in MANAGED_SCRIPTS {
        scripts.insert((*key).to_string(), Value::String((*command).to_string()));
    }

    let mut updated = serde_json::to_string_pretty(&manifest)?;
    updated.push('\n');
    std::fs::write(&path, updated)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(true)
}
