//! Package manager detection and build invocation
//!
//! The package manager is chosen by lockfile presence, with npm as the
//! fallback. Build commands run as blocking child processes; the exit code
//! decides success.

use crate::RECURSION_GUARD_ENV;
use crate::cli::Output;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// A supported JavaScript package manager.
pub struct PackageManager {
    pub name: &'static str,
    lockfile: &'static str,
    run_args: &'static [&'static str],
}

const PACKAGE_MANAGERS: &[PackageManager] = &[
    PackageManager {
        name: "pnpm",
        lockfile: "pnpm-lock.yaml",
        run_args: &["run"],
    },
    PackageManager {
        name: "yarn",
        lockfile: "yarn.lock",
        run_args: &["run"],
    },
    PackageManager {
        name: "npm",
        lockfile: "package-lock.json",
        run_args: &["run"],
    },
];

/// Pick the package manager whose lockfile exists at the repository root.
/// Without a lockfile, npm is assumed.
pub fn detect_package_manager(root: &Path) -> &'static PackageManager {
    PACKAGE_MANAGERS
        .iter()
        .find(|pm| root.join(pm.lockfile).exists())
        .unwrap_or(&PACKAGE_MANAGERS[2])
}

impl PackageManager {
    /// Whether the package manager binary is on PATH.
    pub fn is_available(&self) -> bool {
        which::which(self.name).is_ok()
    }

    /// Run a manifest script in `dir` and report whether it succeeded.
    ///
    /// The child environment carries the recursion guard variable: a `build`
    /// script wired back to this tool exits immediately instead of re-entering
    /// the hook pipeline.
    pub fn run_script(&self, dir: &Path, script: &str, output: &Output) -> Result<bool> {
        let mut cmd = Command::new(self.name);
        cmd.args(self.run_args)
            .arg(script)
            .current_dir(dir)
            .env(RECURSION_GUARD_ENV, "1");

        if output.is_verbose() {
            output.verbose(&format!(
                "Running: {} {} {} (in {})",
                self.name,
                self.run_args.join(" "),
                script,
                dir.display()
            ));
        }

        let result = cmd
            .output()
            .with_context(|| format!("Failed to invoke '{}'", self.name))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            for line in stderr.lines().rev().take(8).collect::<Vec<_>>().into_iter().rev() {
                output.indent(line);
            }
        }

        Ok(result.status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lockfile_selects_package_manager() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(detect_package_manager(dir.path()).name, "yarn");

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(detect_package_manager(dir.path()).name, "pnpm");
    }

    #[test]
    fn npm_is_the_fallback() {
        let dir = TempDir::new().unwrap();
        assert_eq!(detect_package_manager(dir.path()).name, "npm");
    }
}
