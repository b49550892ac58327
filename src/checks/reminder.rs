//! Git-status reminder
//!
//! Three independent findings: a dirty working tree, a stale last commit, and
//! a branch trailing its upstream. Advisory by default; in enforcing mode any
//! finding blocks. Network problems while checking the upstream are swallowed
//! silently; reminders must work offline.

use super::{CheckContext, CheckOutcome};
use anyhow::Result;
use std::time::Duration;

/// Maximum changed paths listed before collapsing into "+N more".
const DIRTY_LIST_CAP: usize = 10;

/// Run the reminder check.
pub fn run(ctx: &CheckContext) -> Result<CheckOutcome> {
    let cfg = &ctx.config.git_reminder;
    if !cfg.enabled {
        return Ok(CheckOutcome::Skipped);
    }

    ctx.output.step("Checking repository status");

    let mut findings: Vec<String> = Vec::new();

    // Dirty working tree. A status failure here is internal: printed, not fatal.
    match ctx.repo.changed_paths() {
        Ok(paths) if !paths.is_empty() => {
            findings.push(format!("{} uncommitted change(s)", paths.len()));
            report_dirty(ctx, &paths, cfg.enforce);
        }
        Ok(_) => {}
        Err(err) => ctx.output.error(&format!("Could not read status: {err:#}")),
    }

    // Commit recency. No commits yet means nothing to measure.
    if let Some(last) = ctx.repo.last_commit_time() {
        let elapsed = last.elapsed().unwrap_or(Duration::ZERO);
        let threshold = cfg.settings.hours_threshold;
        if is_stale(elapsed, threshold) {
            let hours = elapsed.as_secs() / 3600;
            let message =
                format!("Last commit was {hours}h ago (threshold {threshold}h), consider committing more often");
            warn_or_error(ctx, &message, cfg.enforce);
            findings.push(format!("last commit {hours}h old"));
        }
    }

    // Upstream divergence; silently absent without an upstream or offline.
    if let Some(behind) = ctx.repo.commits_behind_upstream() {
        if behind > 0 {
            let message =
                format!("Current branch is {behind} commit(s) behind its upstream, consider pulling");
            warn_or_error(ctx, &message, cfg.enforce);
            findings.push(format!("{behind} commit(s) behind upstream"));
        }
    }

    if findings.is_empty() {
        ctx.output.success("Repository status looks fresh");
        return Ok(CheckOutcome::Passed);
    }

    if cfg.enforce {
        Ok(CheckOutcome::Blocking {
            reason: findings.join("; "),
        })
    } else {
        Ok(CheckOutcome::Advisory {
            findings: findings.len(),
        })
    }
}

/// Staleness rule: strictly older than the threshold.
pub fn is_stale(elapsed: Duration, threshold_hours: u64) -> bool {
    elapsed > Duration::from_secs(threshold_hours * 3600)
}

fn report_dirty(ctx: &CheckContext, paths: &[String], enforce: bool) {
    warn_or_error(ctx, "Working tree has uncommitted changes:", enforce);
    for path in paths.iter().take(DIRTY_LIST_CAP) {
        ctx.output.list_item(path);
    }
    if paths.len() > DIRTY_LIST_CAP {
        ctx.output
            .list_item(&format!("+{} more", paths.len() - DIRTY_LIST_CAP));
    }
}

fn warn_or_error(ctx: &CheckContext, message: &str, enforce: bool) {
    if enforce {
        ctx.output.error(message);
    } else {
        ctx.output.warning(message);
    }
}
