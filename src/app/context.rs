use std::path::PathBuf;

use anyhow::Result;

use crate::core::{repo, store};

/// Paths resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub git_dir: PathBuf,
    pub store_path: PathBuf,
}

impl AppContext {
    pub fn new(git_dir: PathBuf) -> Self {
        let store_path = store::store_path(&git_dir);
        Self {
            git_dir,
            store_path,
        }
    }

    /// Convenience constructor locating the repository from the working directory.
    ///
    /// # Errors
    /// Returns an error if no repository metadata directory can be found.
    pub fn from_cwd() -> Result<Self> {
        let git_dir = repo::git_dir()?;
        Ok(Self::new(git_dir))
    }
}
