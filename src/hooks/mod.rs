//! Git hook entry points
//!
//! Hook scripts installed into `.git/hooks` re-invoke the binary with
//! `commitguard run <hook>`. Each script checks the recursion guard variable
//! first so a build wired back to this tool cannot loop the pipeline.

pub mod pipeline;
pub mod pre_commit;
pub mod pre_push;

use crate::RECURSION_GUARD_ENV;

/// Marker comment written into every managed hook script; uninstall removes
/// only scripts carrying it.
pub const HOOK_MARKER: &str = "# Installed by commitguard";

/// Hooks this tool manages.
pub const MANAGED_HOOKS: &[&str] = &["pre-commit", "pre-push"];

/// Shell script content for a managed hook.
pub fn hook_script(hook: &str) -> String {
    format!(
        "#!/bin/sh\n\
         {HOOK_MARKER}\n\
         if [ -n \"${RECURSION_GUARD_ENV}\" ]; then\n\
         \x20\x20exit 0\n\
         fi\n\
         exec commitguard run {hook}\n"
    )
}
