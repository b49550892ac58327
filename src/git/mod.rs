//! Git integration layer for commitguard
//!
//! A thin high-level wrapper around git2. It handles repository discovery,
//! staging-area queries, commit recency, upstream divergence, and hook
//! script management.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

mod operations;

pub use operations::{StageStatus, StagedFile};

/// Handle to the repository the hook pipeline operates on.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a repository at a known path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;
        Ok(Self { repo })
    }

    /// Discover the repository from the current directory. Not being inside a
    /// repository is an environment error; hooks cannot run without one.
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".")
            .context("Not inside a git repository (hooks require one)")?;
        Ok(Self { repo })
    }

    /// Working directory root, i.e. where the manifest and ignore-file live.
    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .context("Repository has no working directory (bare repo)")
    }

    /// Install a hook script under `.git/hooks`, executable on unix.
    pub fn install_hook(&self, hook_name: &str, hook_content: &str) -> Result<()> {
        let hooks_dir = self.repo.path().join("hooks");
        let hook_path = hooks_dir.join(hook_name);

        std::fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;
        std::fs::write(&hook_path, hook_content)
            .with_context(|| format!("Failed to write hook file: {}", hook_path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&hook_path)
                .context("Failed to get hook file metadata")?
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&hook_path, perms)
                .context("Failed to set hook file permissions")?;
        }

        Ok(())
    }

    /// Remove a hook script if present.
    pub fn remove_hook(&self, hook_name: &str) -> Result<()> {
        let hook_path = self.repo.path().join("hooks").join(hook_name);
        if hook_path.exists() {
            std::fs::remove_file(&hook_path).context("Failed to remove hook file")?;
        }
        Ok(())
    }

    /// Read a hook script's content, if the hook exists.
    pub fn read_hook(&self, hook_name: &str) -> Option<String> {
        let hook_path = self.repo.path().join("hooks").join(hook_name);
        std::fs::read_to_string(hook_path).ok()
    }

    /// Check whether a hook script exists.
    pub fn hook_exists(&self, hook_name: &str) -> bool {
        self.repo.path().join("hooks").join(hook_name).exists()
    }
}
