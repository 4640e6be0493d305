//! Thin wrappers around the system `git` command.
//!
//! Everything runs `git` as a subprocess inside a profile directory, so the
//! user's SSH keys, credential helpers and global configuration apply
//! exactly as they would in a shell.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Name of the remote that sync operations use.
pub const REMOTE: &str = "origin";

/// Branch pushed when the current branch cannot be determined.
pub const DEFAULT_BRANCH: &str = "main";

/// Returns true when `git` can be found on `PATH`.
pub fn is_installed() -> bool {
    which::which("git").is_ok()
}

/// Returns true when `dir` has its own `.git` directory.
pub fn is_repository(dir: &Path) -> bool {
    dir.join(".git").exists()
}

fn command_error(args: &[&str], stderr: impl Into<String>) -> Error {
    Error::Command {
        program: "git".to_string(),
        command: args.join(" "),
        stderr: stderr.into(),
    }
}

/// Run `git <args>` in `dir` and return its trimmed stdout.
fn run(dir: &Path, args: &[&str]) -> Result<String> {
    log::debug!("git {} (in {})", args.join(" "), dir.display());
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| command_error(args, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(command_error(args, stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

/// Run `git <args>` in `dir` with the terminal attached.
fn run_attached(dir: &Path, args: &[&str]) -> Result<()> {
    log::debug!("git {} (in {}, attached)", args.join(" "), dir.display());
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| command_error(args, e.to_string()))?;

    if !status.success() {
        return Err(command_error(args, format!("exited with {status}")));
    }
    Ok(())
}

/// `git init`
pub fn init(dir: &Path) -> Result<()> {
    run(dir, &["init"]).map(drop)
}

/// `git add .`
pub fn add_all(dir: &Path) -> Result<()> {
    run(dir, &["add", "."]).map(drop)
}

/// `git commit -m <message>`
pub fn commit(dir: &Path, message: &str) -> Result<()> {
    run(dir, &["commit", "-m", message]).map(drop)
}

/// URL of the `origin` remote, if one is configured.
pub fn remote_url(dir: &Path) -> Option<String> {
    run(dir, &["remote", "get-url", REMOTE])
        .ok()
        .filter(|url| !url.is_empty())
}

/// `git remote add origin <url>`
pub fn add_remote(dir: &Path, url: &str) -> Result<()> {
    run(dir, &["remote", "add", REMOTE, url]).map(drop)
}

/// `git remote set-url origin <url>`
pub fn set_remote(dir: &Path, url: &str) -> Result<()> {
    run(dir, &["remote", "set-url", REMOTE, url]).map(drop)
}

/// Point `origin` at `url`, adding the remote when missing. Returns true
/// when an existing remote was updated.
pub fn upsert_remote(dir: &Path, url: &str) -> Result<bool> {
    if remote_url(dir).is_some() {
        set_remote(dir, url)?;
        Ok(true)
    } else {
        add_remote(dir, url)?;
        Ok(false)
    }
}

/// Returns true when the working tree has uncommitted changes.
pub fn is_dirty(dir: &Path) -> Result<bool> {
    Ok(!run(dir, &["status", "--porcelain"])?.is_empty())
}

/// `git status --short` output.
pub fn status_short(dir: &Path) -> Result<String> {
    run(dir, &["status", "--short"])
}

/// Current branch, falling back to [`DEFAULT_BRANCH`].
pub fn current_branch(dir: &Path) -> String {
    run(dir, &["branch", "--show-current"])
        .ok()
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string())
}

/// `git pull origin main`, retried with `master`.
pub fn pull(dir: &Path) -> Result<()> {
    if let Err(e) = run_attached(dir, &["pull", REMOTE, "main"]) {
        log::debug!("pull from main failed, trying master: {e}");
        run_attached(dir, &["pull", REMOTE, "master"])?;
    }
    Ok(())
}

/// `git push origin <branch> [--force]`
pub fn push(dir: &Path, branch: &str, force: bool) -> Result<()> {
    let mut args = vec!["push", REMOTE, branch];
    if force {
        args.push("--force");
    }
    run_attached(dir, &args)
}

/// `git status` with the terminal attached.
pub fn show_status(dir: &Path) -> Result<()> {
    run_attached(dir, &["status"])
}

/// `git remote -v` with the terminal attached.
pub fn show_remotes(dir: &Path) -> Result<()> {
    run_attached(dir, &["remote", "-v"])
}

/// Read `key` from a specific git config file.
///
/// Returns `None` when the file or the key does not exist.
pub fn config_value(file: &Path, key: &str) -> Option<String> {
    if !file.is_file() {
        return None;
    }
    let file = file.to_string_lossy();
    let parent = Path::new(".");
    run(parent, &["config", "--file", &file, "--get", key])
        .ok()
        .filter(|v| !v.is_empty())
}
