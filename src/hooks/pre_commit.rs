//! Pre-commit hook implementation
//!
//! Runs the full pipeline: gitignore audit, lowercase audit, affected
//! builds, then the git-status reminder.

use super::pipeline::{self, PipelineResult, PipelineState};
use crate::checks::CheckContext;
use anyhow::Result;

/// Execute the pre-commit hook pipeline.
pub async fn execute(ctx: &CheckContext<'_>) -> Result<PipelineResult> {
    pipeline::run(ctx, PipelineState::Gitignore)
}
