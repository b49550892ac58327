//! Run a single check outside the pipeline
//!
//! Backs the manifest script entries (`check-gitignore`, `check-lowercase`,
//! `git-reminder`) so each check can be invoked by hand.

use crate::checks::{self, CheckContext, CheckOutcome};
use crate::cli::{CheckCommands, Output};
use crate::config::HookConfig;
use crate::git::GitRepo;
use anyhow::Result;
use std::path::Path;

/// Execute one check by name.
pub async fn execute(cmd: CheckCommands, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let repo = GitRepo::discover()?;
    let root = repo.workdir()?;
    let config = HookConfig::load_or_default(config_path, &root);

    let ctx = CheckContext {
        repo: &repo,
        root: &root,
        config: &config,
        output,
    };

    let outcome = match cmd {
        CheckCommands::Gitignore => checks::gitignore::run(&ctx)?,
        CheckCommands::Lowercase => checks::lowercase::run(&ctx)?,
        CheckCommands::Build => checks::build::run(&ctx)?,
        CheckCommands::Reminder => checks::reminder::run(&ctx)?,
    };

    if let CheckOutcome::Blocking { reason } = outcome {
        output.error(&reason);
        std::process::exit(1);
    }

    Ok(())
}
