//! Show repository and hook status

use crate::cli::Output;
use crate::config::HookConfig;
use crate::external::detect_package_manager;
use crate::git::GitRepo;
use crate::hooks::{HOOK_MARKER, MANAGED_HOOKS};
use crate::project::{self, Manifest, ProjectKind};
use anyhow::Result;

/// Execute the status command.
pub async fn execute(output: &Output) -> Result<()> {
    output.header("Commitguard status");

    let repo = GitRepo::discover()?;
    let root = repo.workdir()?;

    output.table_row("Repository", &root.display().to_string());

    let config_file = HookConfig::find_config_file(&root);
    match &config_file {
        Some(path) => output.table_row("Config", &path.display().to_string()),
        None => output.table_row("Config", "built-in defaults"),
    }

    for hook in MANAGED_HOOKS {
        let state = match repo.read_hook(hook) {
            Some(content) if content.contains(HOOK_MARKER) => "installed",
            Some(_) => "foreign script",
            None => "not installed",
        };
        output.table_row(&format!("{hook} hook"), state);
    }

    match Manifest::load(&root) {
        Ok(manifest) => {
            let kind = match project::detect_kind(&root, &manifest) {
                ProjectKind::Workspace => "workspace",
                ProjectKind::Single => "single project",
            };
            output.table_row("Project", kind);

            let pm = detect_package_manager(&root);
            let availability = if pm.is_available() { "" } else { " (not on PATH)" };
            output.table_row("Package manager", &format!("{}{}", pm.name, availability));
        }
        Err(_) => output.table_row("Project", "no manifest"),
    }

    Ok(())
}
