//! Pre-push hook implementation
//!
//! Runs the push-relevant tail of the pipeline. Staged-file checks belong to
//! commit time; at push time only the build and the status reminder matter.

use super::pipeline::{self, PipelineResult, PipelineState};
use crate::checks::CheckContext;
use anyhow::Result;

/// Execute the pre-push hook pipeline.
pub async fn execute(ctx: &CheckContext<'_>) -> Result<PipelineResult> {
    pipeline::run(ctx, PipelineState::Build)
}
