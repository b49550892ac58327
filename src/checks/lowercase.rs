//! Lowercase auditor
//!
//! Scans staged files for uppercase characters in base filenames and in
//! relative import specifiers. Advisory by nature: it never renames or
//! rewrites anything, it only warns or blocks the commit.
//!
//! Import extraction is regex-based and heuristic. Template-literal
//! specifiers and computed paths are not recognized; that mirrors the limits
//! of scanning source text line by line.

use super::{CheckContext, CheckOutcome};
use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use std::path::Path;

/// Extensions whose content is scanned for import statements.
pub const SOURCE_EXTENSIONS: &[&str] =
    &["js", "jsx", "ts", "tsx", "mjs", "cjs", "vue", "svelte"];

/// A flagged import: the file it lives in plus the offending specifier.
#[derive(Debug)]
pub struct ImportFinding {
    pub file: String,
    pub specifier: String,
}

/// Aggregated findings, split into the two reported buckets.
#[derive(Debug, Default)]
pub struct LowercaseReport {
    pub filenames: Vec<String>,
    pub imports: Vec<ImportFinding>,
}

impl LowercaseReport {
    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty() && self.imports.is_empty()
    }

    pub fn total(&self) -> usize {
        self.filenames.len() + self.imports.len()
    }
}

/// Compiled extraction patterns for the import forms we recognize: static
/// import, bare side-effect import, dynamic import, require call, re-export,
/// and the framework dynamic-import helper.
pub struct ImportScanner {
    patterns: Vec<Regex>,
}

impl ImportScanner {
    pub fn new() -> Result<Self> {
        let patterns = vec![
            // import foo, { bar } from './path'
            Regex::new(r#"import\s+[\w$*\s{},]*?\s*from\s*['"]([^'"]+)['"]"#)?,
            // import './path'
            Regex::new(r#"import\s*['"]([^'"]+)['"]"#)?,
            // import('./path')
            Regex::new(r#"import\s*\(\s*['"]([^'"]+)['"]\s*\)"#)?,
            // require('./path')
            Regex::new(r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#)?,
            // export { foo } from './path'
            Regex::new(r#"export\s+[\w$*\s{},]*?\s*from\s*['"]([^'"]+)['"]"#)?,
            // dynamic(() => import('./path'))
            Regex::new(r#"dynamic\s*\(\s*\(\s*\)\s*=>\s*import\s*\(\s*['"]([^'"]+)['"]"#)?,
        ];
        Ok(Self { patterns })
    }

    /// Import specifiers found in one line of source.
    pub fn specifiers<'t>(&self, line: &'t str) -> Vec<&'t str> {
        let mut found = Vec::new();
        for pattern in &self.patterns {
            for caps in pattern.captures_iter(line) {
                if let Some(m) = caps.get(1) {
                    if !found.contains(&m.as_str()) {
                        found.push(m.as_str());
                    }
                }
            }
        }
        found
    }
}

/// Only relative specifiers are checked; package names and URLs are someone
/// else's naming convention.
pub fn violates_lowercase(specifier: &str) -> bool {
    specifier.starts_with('.') && has_uppercase(specifier)
}

fn has_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

/// Build the matcher for directories excluded from scanning. Entries are
/// plain directory names or globs, matched anywhere in the staged path.
pub fn exclusion_set(exclude_dirs: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for dir in exclude_dirs {
        builder.add(Glob::new(&format!("{dir}/**"))?);
        builder.add(Glob::new(&format!("**/{dir}/**"))?);
    }
    Ok(builder.build()?)
}

/// Run the lowercase check over the staged file set.
pub fn run(ctx: &CheckContext) -> Result<CheckOutcome> {
    let cfg = &ctx.config.lowercase;
    if !cfg.enabled {
        return Ok(CheckOutcome::Skipped);
    }

    ctx.output.step("Checking staged files for lowercase naming");

    let staged = ctx.repo.staged_files()?;
    if staged.is_empty() {
        ctx.output.info("No staged files to check");
        return Ok(CheckOutcome::Skipped);
    }

    let excluded = exclusion_set(&cfg.settings.exclude_dirs)?;
    let scanner = ImportScanner::new()?;

    let mut report = LowercaseReport::default();
    for file in &staged {
        if file.is_deleted() || excluded.is_match(&file.path) {
            continue;
        }

        if let Some(name) = file.path.file_name().and_then(|n| n.to_str()) {
            if has_uppercase(name) {
                report.filenames.push(file.path.display().to_string());
            }
        }

        if is_source_file(&file.path) {
            scan_imports(ctx, &file.path, &scanner, &mut report);
        }
    }

    if report.is_empty() {
        ctx.output.success("Staged names and imports are lowercase");
        return Ok(CheckOutcome::Passed);
    }

    report_findings(ctx, &report, cfg.enforce);

    if cfg.enforce {
        Ok(CheckOutcome::Blocking {
            reason: format!(
                "{} filename(s) and {} import path(s) violate lowercase naming",
                report.filenames.len(),
                report.imports.len()
            ),
        })
    } else {
        Ok(CheckOutcome::Advisory {
            findings: report.total(),
        })
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Scan one staged file's imports. An unreadable file is an internal error:
/// printed, never fatal.
fn scan_imports(
    ctx: &CheckContext,
    rel_path: &Path,
    scanner: &ImportScanner,
    report: &mut LowercaseReport,
) {
    let content = match std::fs::read_to_string(ctx.root.join(rel_path)) {
        Ok(content) => content,
        Err(err) => {
            ctx.output
                .error(&format!("Could not read {}: {err}", rel_path.display()));
            return;
        }
    };

    for line in content.lines() {
        for specifier in scanner.specifiers(line) {
            if violates_lowercase(specifier) {
                report.imports.push(ImportFinding {
                    file: rel_path.display().to_string(),
                    specifier: specifier.to_string(),
                });
            }
        }
    }
}

fn report_findings(ctx: &CheckContext, report: &LowercaseReport, enforce: bool) {
    let emit = |message: &str| {
        if enforce {
            ctx.output.error(message);
        } else {
            ctx.output.warning(message);
        }
    };

    if !report.filenames.is_empty() {
        emit("Staged filenames contain uppercase characters:");
        for name in &report.filenames {
            ctx.output.list_item(name);
        }
    }
    if !report.imports.is_empty() {
        emit("Relative import paths contain uppercase characters:");
        for finding in &report.imports {
            ctx.output
                .list_item(&format!("{} → '{}'", finding.file, finding.specifier));
        }
    }
    if enforce {
        ctx.output
            .indent("Rename to lowercase (git mv) and update imports accordingly.");
    }
}
