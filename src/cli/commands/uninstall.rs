//! Remove commitguard hooks
//!
//! Only hook scripts carrying the commitguard marker are removed; hooks the
//! user wrote themselves are left alone.

use crate::cli::Output;
use crate::git::GitRepo;
use crate::hooks::{HOOK_MARKER, MANAGED_HOOKS};
use anyhow::Result;

/// Execute the uninstall command.
pub async fn execute(output: &Output) -> Result<()> {
    output.header("Removing commitguard hooks");

    let repo = GitRepo::discover()?;

    for hook in MANAGED_HOOKS {
        match repo.read_hook(hook) {
            Some(content) if content.contains(HOOK_MARKER) => {
                repo.remove_hook(hook)?;
                output.success(&format!("Removed {hook} hook"));
            }
            Some(_) => {
                output.warning(&format!("{hook} hook was not installed by commitguard, leaving it"));
            }
            None => {
                output.info(&format!("No {hook} hook installed"));
            }
        }
    }

    Ok(())
}
