use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Name of the metadata directory that marks a repository root.
pub const GIT_DIR_NAME: &str = ".git";

/// Walk from `start` up to and including the filesystem root and return the
/// first `.git` entry that is a directory.
///
/// A `.git` *file* (worktrees, submodules) is not accepted as a match.
#[must_use]
pub fn find_git_dir_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(GIT_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Locate the metadata directory for the current working directory.
///
/// # Errors
/// Returns an error if the working directory cannot be read or no ancestor
/// contains a `.git` directory.
pub fn git_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let found = find_git_dir_from(&cwd).context("Not in a Git repository")?;
    debug!(path = %found.display(), "located repository metadata");
    Ok(found)
}
