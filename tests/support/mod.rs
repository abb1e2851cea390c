use std::path::Path;

use assert_cmd::Command;

/// `git init` a fresh repository at `root`.
pub fn git_init(root: &Path) {
    let mut cmd = Command::new("git");
    cmd.current_dir(root).args(["init", "--quiet"]);
    cmd.assert().success();
}

#[allow(dead_code)]
/// Read a local config value with the real `git` binary.
pub fn git_local_config(root: &Path, key: &str) -> Option<String> {
    let output = std::process::Command::new("git")
        .current_dir(root)
        .args(["config", "--local", key])
        .output()
        .expect("run git config");
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}
