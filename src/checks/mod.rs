//! Hook pipeline checks
//!
//! Each check is an isolated unit: it converts every failure mode into a
//! [`CheckOutcome`] rather than letting errors cross its boundary. The only
//! exception is environment errors (no repository, no manifest, missing
//! package manager), which propagate as `anyhow` errors and abort the run
//! regardless of enforce flags.

pub mod build;
pub mod gitignore;
pub mod lowercase;
pub mod reminder;

use crate::cli::Output;
use crate::config::HookConfig;
use crate::git::GitRepo;
use std::path::Path;

/// Shared, read-only inputs for a check run.
pub struct CheckContext<'a> {
    pub repo: &'a GitRepo,
    pub root: &'a Path,
    pub config: &'a HookConfig,
    pub output: &'a Output,
}

/// How a single check resolved.
#[derive(Debug)]
pub enum CheckOutcome {
    /// Disabled in configuration, or nothing applicable to inspect.
    Skipped,
    /// Ran and found nothing.
    Passed,
    /// Findings reported as warnings; the pipeline continues.
    Advisory { findings: usize },
    /// Enforcing violation; the pipeline stops and the commit is aborted.
    Blocking { reason: String },
}

impl CheckOutcome {
    pub fn is_blocking(&self) -> bool {
        matches!(self, CheckOutcome::Blocking { .. })
    }
}
