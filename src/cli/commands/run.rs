//! Run a hook pipeline
//!
//! Entry point invoked by the installed hook scripts. Exit code zero lets
//! the git operation continue; non-zero aborts it.

use crate::RECURSION_GUARD_ENV;
use crate::checks::CheckContext;
use crate::cli::Output;
use crate::config::HookConfig;
use crate::git::GitRepo;
use crate::hooks;
use anyhow::{Result, bail};
use std::path::Path;

/// Execute a named hook pipeline.
pub async fn execute(hook: &str, config_path: Option<&Path>, output: &Output) -> Result<()> {
    // A build spawned by this very pipeline must not re-enter it.
    if std::env::var_os(RECURSION_GUARD_ENV).is_some() {
        output.verbose("Recursion guard set, skipping hook pipeline");
        return Ok(());
    }

    let repo = GitRepo::discover()?;
    let root = repo.workdir()?;
    let config = HookConfig::load_or_default(config_path, &root);

    let ctx = CheckContext {
        repo: &repo,
        root: &root,
        config: &config,
        output,
    };

    let result = match hook {
        "pre-commit" => hooks::pre_commit::execute(&ctx).await?,
        "pre-push" => hooks::pre_push::execute(&ctx).await?,
        unknown => bail!("Unknown hook: {unknown} (expected pre-commit or pre-push)"),
    };

    if let Some(reason) = result.blocked {
        output.error(&reason);
        output.indent("Bypass once with --no-verify if you must.");
        std::process::exit(1);
    }

    output.success(&format!("{hook} checks passed"));
    Ok(())
}
