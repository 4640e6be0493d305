//! Queries and actions on direnv, the loader that activates profiles.
//!
//! direnv is never reimplemented here; these helpers only locate the binary
//! and run `direnv status` / `direnv allow` inside a profile.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

const PROGRAM: &str = "direnv";

/// Returns true when `direnv` can be found on `PATH`.
pub fn is_installed() -> bool {
    which::which(PROGRAM).is_ok()
}

/// Fail with [`Error::ToolMissing`] unless `direnv` is on `PATH`.
pub fn require() -> Result<()> {
    if is_installed() {
        Ok(())
    } else {
        Err(Error::ToolMissing {
            tool: PROGRAM.to_string(),
        })
    }
}

/// Interpret `direnv status` output for the `.envrc` it found.
///
/// Older releases print `Found RC allowed true`, newer ones report the
/// allow state as a number where `0` means allowed.
pub fn parse_allowed(status: &str) -> bool {
    status.lines().any(|line| {
        let line = line.trim();
        line == "Found RC allowed true" || line == "Found RC allowed 0"
    })
}

/// Whether the `.envrc` in `dir` is allowed.
///
/// Returns `None` when direnv is missing or `direnv status` fails.
pub fn is_allowed(dir: &Path) -> Option<bool> {
    if !is_installed() {
        return None;
    }
    log::debug!("direnv status (in {})", dir.display());
    let output = Command::new(PROGRAM)
        .arg("status")
        .current_dir(dir)
        .output()
        .ok()?;
    if !output.status.success() {
        log::debug!("direnv status exited with {}", output.status);
        return None;
    }
    Some(parse_allowed(&String::from_utf8_lossy(&output.stdout)))
}

fn run_attached(dir: Option<&Path>, arg: &str) -> Result<()> {
    let mut cmd = Command::new(PROGRAM);
    cmd.arg(arg)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let failed = |stderr: String| Error::Command {
        program: PROGRAM.to_string(),
        command: arg.to_string(),
        stderr,
    };
    let status = cmd.status().map_err(|e| failed(e.to_string()))?;
    if !status.success() {
        return Err(failed(format!("exited with {status}")));
    }
    Ok(())
}

/// `direnv allow` inside `dir`.
pub fn allow(dir: &Path) -> Result<()> {
    run_attached(Some(dir), "allow")
}

/// `direnv status` in the current directory, output passed through.
pub fn show_status() -> Result<()> {
    run_attached(None, "status")
}
