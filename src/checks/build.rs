//! Build runner
//!
//! Determines whether the repository is a single project or a multi-package
//! workspace, then runs the relevant `build` scripts through the detected
//! package manager. Workspace members build sequentially in discovery order
//! so the first failing package is unambiguous in the report.

use super::{CheckContext, CheckOutcome};
use crate::external::detect_package_manager;
use crate::git::StagedFile;
use crate::project::{self, Manifest, ProjectDescriptor, ProjectKind};
use anyhow::{Result, bail};
use std::path::Path;

/// Run the build check.
///
/// Environment errors (missing manifest, package manager not on PATH)
/// propagate and abort the pipeline regardless of the enforce flag.
pub fn run(ctx: &CheckContext) -> Result<CheckOutcome> {
    let cfg = &ctx.config.build;
    if !cfg.enabled {
        return Ok(CheckOutcome::Skipped);
    }

    ctx.output.step("Building affected projects");

    let manifest = Manifest::load(ctx.root)?;
    let pm = detect_package_manager(ctx.root);
    if !pm.is_available() {
        bail!("Package manager '{}' not found in PATH", pm.name);
    }

    match project::detect_kind(ctx.root, &manifest) {
        ProjectKind::Single => run_single(ctx, &manifest, pm),
        ProjectKind::Workspace => run_workspace(ctx, pm),
    }
}

fn run_single(
    ctx: &CheckContext,
    manifest: &Manifest,
    pm: &crate::external::PackageManager,
) -> Result<CheckOutcome> {
    if manifest.build_script().is_none() {
        ctx.output.info("No build script declared, skipping build");
        return Ok(CheckOutcome::Skipped);
    }

    if pm.run_script(ctx.root, "build", ctx.output)? {
        ctx.output.success("Build passed");
        return Ok(CheckOutcome::Passed);
    }

    let name = manifest.name.as_deref().unwrap_or("project");
    fail(ctx, name)
}

fn run_workspace(
    ctx: &CheckContext,
    pm: &crate::external::PackageManager,
) -> Result<CheckOutcome> {
    let cfg = &ctx.config.build;
    let packages = project::discover_packages(ctx.root, &cfg.settings.exclude_dirs)?;
    let staged = ctx.repo.staged_files()?;
    let affected = select_affected(&packages, &staged, &cfg.settings.shared_paths);

    if affected.is_empty() {
        ctx.output.info("No buildable packages affected by staged files");
        return Ok(CheckOutcome::Skipped);
    }

    let mut warnings = 0;
    for pkg in affected {
        ctx.output
            .verbose(&format!("Building package '{}'", pkg.name));
        if pm.run_script(&pkg.dir, "build", ctx.output)? {
            ctx.output.success(&format!("Build passed: {}", pkg.name));
            continue;
        }

        if cfg.enforce {
            return fail(ctx, &pkg.name);
        }
        ctx.output
            .warning(&format!("Build failed for package '{}'", pkg.name));
        warnings += 1;
    }

    if warnings > 0 {
        Ok(CheckOutcome::Advisory { findings: warnings })
    } else {
        Ok(CheckOutcome::Passed)
    }
}

fn fail(ctx: &CheckContext, name: &str) -> Result<CheckOutcome> {
    ctx.output
        .indent(&format!("Fix the build in '{name}' before committing."));
    Ok(CheckOutcome::Blocking {
        reason: format!("Build failed for package '{name}'"),
    })
}

/// Workspace members worth building for this commit: app packages with a
/// `build` script that are touched by a staged path. When a staged path
/// falls under a configured shared prefix, every buildable app is in scope.
/// The shared-path heuristic can over-trigger; it is configurable via
/// settings rather than hard-coded.
pub fn select_affected<'a>(
    packages: &'a [ProjectDescriptor],
    staged: &[StagedFile],
    shared_paths: &[String],
) -> Vec<&'a ProjectDescriptor> {
    let shared_touched = staged.iter().any(|file| {
        shared_paths
            .iter()
            .any(|prefix| file.path.starts_with(Path::new(prefix)))
    });

    packages
        .iter()
        .filter(|pkg| pkg.has_build_script() && pkg.is_app())
        .filter(|pkg| {
            shared_touched || staged.iter().any(|file| file.path.starts_with(&pkg.rel))
        })
        .collect()
}
