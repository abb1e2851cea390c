use std::{path::PathBuf, process::Command};

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Narrow access to local-scope repository configuration.
pub trait ConfigBackend {
    /// Read a local config value. Any failure means "not configured".
    fn read_config(&self, key: &str) -> Option<String>;

    /// Write a local config value.
    ///
    /// # Errors
    /// Returns an error if the value could not be stored.
    fn write_config(&self, key: &str, value: &str) -> Result<()>;
}

/// [`ConfigBackend`] that shells out to the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    git_dir: PathBuf,
}

impl GitCli {
    pub fn new(git_dir: impl Into<PathBuf>) -> Self {
        Self {
            git_dir: git_dir.into(),
        }
    }

    fn config_command(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg(format!("--git-dir={}", self.git_dir.display()))
            .args(["config", "--local"]);
        cmd
    }
}

impl ConfigBackend for GitCli {
    fn read_config(&self, key: &str) -> Option<String> {
        let output = match self.config_command().arg(key).output() {
            Ok(output) => output,
            Err(e) => {
                debug!(key, error = %e, "failed to run git config");
                return None;
            }
        };

        if !output.status.success() {
            debug!(key, status = %output.status, "git config returned no value");
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!value.is_empty()).then_some(value)
    }

    fn write_config(&self, key: &str, value: &str) -> Result<()> {
        let output = self
            .config_command()
            .args([key, value])
            .output()
            .with_context(|| format!("failed to run git config {key}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "git config {key} exited with status {}: {}",
                output.status,
                stderr.trim()
            );
        }

        debug!(key, "updated local git config");
        Ok(())
    }
}
