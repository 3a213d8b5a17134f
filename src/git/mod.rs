//! Git integration layer for commitgate
//!
//! A thin interface over git2 for the operations the pipeline needs:
//! repository discovery, the staged file list, the current branch name,
//! and hook installation in `.git/hooks`.

use anyhow::{Context, Result};
use git2::{Repository, Status, StatusOptions};
use std::path::PathBuf;

/// Git operations handler
pub struct GitOperations {
    repo: Repository,
}

impl GitOperations {
    /// Discover and open a Git repository from the current directory
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".").context("No Git repository found")?;
        Ok(Self { repo })
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head().context("Failed to get HEAD reference")?;
        let branch_name = head.shorthand().context("Failed to get branch name")?;
        Ok(branch_name.to_string())
    }

    /// List staged files (paths relative to the repository root)
    pub fn staged_files(&self) -> Result<Vec<String>> {
        let mut staged_files = Vec::new();
        let mut opts = StatusOptions::new();
        opts.include_untracked(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .context("Failed to get repository status")?;

        for entry in statuses.iter() {
            if entry.status().contains(Status::INDEX_NEW)
                || entry.status().contains(Status::INDEX_MODIFIED)
                || entry.status().contains(Status::INDEX_RENAMED)
            {
                if let Some(path) = entry.path() {
                    staged_files.push(path.to_string());
                }
            }
        }

        Ok(staged_files)
    }

    /// Path of a named hook inside `.git/hooks`
    pub fn hook_path(&self, hook_name: &str) -> PathBuf {
        self.repo.path().join("hooks").join(hook_name)
    }

    /// Install a git hook and mark it executable
    pub fn install_hook(&self, hook_name: &str, hook_content: &str) -> Result<()> {
        let hooks_dir = self.repo.path().join("hooks");
        let hook_path = hooks_dir.join(hook_name);

        std::fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;
        std::fs::write(&hook_path, hook_content).context("Failed to write hook file")?;

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

    /// Remove a git hook
    pub fn remove_hook(&self, hook_name: &str) -> Result<()> {
        let hook_path = self.hook_path(hook_name);

        if hook_path.exists() {
            std::fs::remove_file(&hook_path).context("Failed to remove hook file")?;
        }

        Ok(())
    }

    /// Check if a hook exists
    pub fn hook_exists(&self, hook_name: &str) -> bool {
        self.hook_path(hook_name).exists()
    }

    /// Read the content of an installed hook, if any
    pub fn read_hook(&self, hook_name: &str) -> Option<String> {
        std::fs::read_to_string(self.hook_path(hook_name)).ok()
    }
}
