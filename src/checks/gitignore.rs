//! Gitignore auditor
//!
//! Compares a fixed list of sensitive-path patterns against `.gitignore` and
//! appends the missing ones under a generated header, then stages the file so
//! the fix rides along with the commit being made.

use super::{CheckContext, CheckOutcome};
use crate::git::GitRepo;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Header line written once above appended patterns.
pub const GENERATED_HEADER: &str = "# Added automatically by commitguard";

/// Patterns every project is expected to ignore: dependency trees, build
/// output, environment files, editor and OS litter.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "node_modules",
    ".env",
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
    "dist",
    "build",
    "coverage",
    "out",
    ".next",
    ".cache",
    ".turbo",
    ".eslintcache",
    ".nyc_output",
    "*.log",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
    "pnpm-debug.log*",
    ".DS_Store",
    "Thumbs.db",
    ".idea",
    ".vscode",
    "*.swp",
];

/// Run the gitignore check. A write or stage failure is the check's violation
/// condition: blocking when enforcing, a warning otherwise.
pub fn run(ctx: &CheckContext) -> Result<CheckOutcome> {
    let cfg = &ctx.config.gitignore;
    if !cfg.enabled {
        return Ok(CheckOutcome::Skipped);
    }

    ctx.output.step("Auditing .gitignore");

    match audit(ctx.root, ctx.repo) {
        Ok(0) => {
            ctx.output.success(".gitignore covers all required patterns");
            Ok(CheckOutcome::Passed)
        }
        Ok(added) => {
            ctx.output.success(&format!(
                "Added {added} missing pattern(s) to .gitignore and staged it"
            ));
            Ok(CheckOutcome::Passed)
        }
        Err(err) if cfg.enforce => Ok(CheckOutcome::Blocking {
            reason: format!("Failed to update .gitignore: {err:#}"),
        }),
        Err(err) => {
            ctx.output
                .warning(&format!("Could not update .gitignore: {err:#}"));
            Ok(CheckOutcome::Advisory { findings: 1 })
        }
    }
}

/// Append missing patterns to the ignore-file and stage it. Returns how many
/// patterns were added; zero means the file was already complete and nothing
/// was touched (re-running is a no-op).
pub fn audit(root: &Path, repo: &GitRepo) -> Result<usize> {
    let path = root.join(".gitignore");
    let existing = if path.exists() {
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        String::new()
    };

    let missing = missing_patterns(&existing, DEFAULT_PATTERNS);
    if missing.is_empty() {
        return Ok(0);
    }

    let mut updated = existing.clone();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(GENERATED_HEADER);
    updated.push('\n');
    for pattern in &missing {
        updated.push_str(pattern);
        updated.push('\n');
    }

    std::fs::write(&path, updated)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    repo.stage_path(Path::new(".gitignore"))
        .context("Failed to stage .gitignore")?;

    Ok(missing.len())
}

/// Patterns not present in the file content, compared as exact trimmed lines.
/// A `pattern/` line counts as present too, since directory patterns are
/// commonly written with a trailing slash.
pub fn missing_patterns<'a>(content: &str, patterns: &'a [&'a str]) -> Vec<&'a str> {
    let lines: HashSet<&str> = content.lines().map(str::trim).collect();
    patterns
        .iter()
        .filter(|pattern| {
            !lines.contains(**pattern) && !lines.contains(format!("{pattern}/").as_str())
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_slash_suffixed_lines_count_as_present() {
        let content = "node_modules/\n.env\n# comment\n";
        let missing = missing_patterns(content, &["node_modules", ".env", "dist"]);
        assert_eq!(missing, vec!["dist"]);
    }

    #[test]
    fn trimming_applies_before_comparison() {
        let content = "  dist  \n";
        let missing = missing_patterns(content, &["dist"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn all_defaults_missing_from_empty_content() {
        let missing = missing_patterns("", DEFAULT_PATTERNS);
        assert_eq!(missing.len(), DEFAULT_PATTERNS.len());
    }

    #[test]
    fn default_pattern_list_has_expected_size() {
        assert_eq!(DEFAULT_PATTERNS.len(), 25);
    }
}
