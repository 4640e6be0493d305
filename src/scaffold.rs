//! # Profile Scaffolding
//!
//! Materialises a new profile on disk. The work is split in two steps so a
//! dry run can describe exactly what would happen:
//!
//! 1.  [`plan`] renders every file from [`crate::templates`] into a list of
//!     [`PlannedFile`]s, each with its target mode.
//! 2.  [`write`] creates the layout directories, then writes the planned
//!     files and applies their permissions on Unix-like systems.
//!
//! Files marked `keep_existing` (the SSH config and `known_hosts`) are never
//! overwritten, so `create --force` does not clobber hand-edited SSH setup.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;
use crate::profile::{Template, ENVRC};
use crate::templates;

/// Mode applied to the `.ssh` directory.
pub const SSH_DIR_MODE: u32 = 0o700;

/// Inputs for rendering a profile.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub name: String,
    pub template: Template,
    pub git_name: Option<String>,
    pub git_email: Option<String>,
}

/// A file that scaffolding will write.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    /// Path relative to the profile directory.
    pub path: PathBuf,
    pub content: String,
    pub mode: u32,
    /// Leave the file alone when it already exists.
    pub keep_existing: bool,
}

impl PlannedFile {
    fn new(path: &str, content: String, mode: u32) -> Self {
        Self {
            path: PathBuf::from(path),
            content,
            mode,
            keep_existing: false,
        }
    }

    fn keep_existing(mut self) -> Self {
        self.keep_existing = true;
        self
    }
}

/// Timestamp written into `.envrc` and `README.md`.
pub fn created_stamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Render `path` with the home directory shortened to `~`.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            if rest.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}

/// Render every file of a new profile living at `dir`.
pub fn plan(dir: &Path, opts: &ScaffoldOptions) -> Vec<PlannedFile> {
    let created = created_stamp();
    let name = opts.name.as_str();
    let abs_dir = dir.display().to_string();

    vec![
        PlannedFile::new(ENVRC, templates::envrc(name, opts.template, &created), 0o644),
        PlannedFile::new(".env", templates::env_file(name, Some(opts.template)), 0o644),
        PlannedFile::new(
            ".gitconfig",
            templates::gitconfig(
                name,
                opts.template,
                opts.git_name.as_deref(),
                opts.git_email.as_deref(),
            ),
            0o644,
        ),
        PlannedFile::new(".ssh/config", templates::ssh_config(name, &abs_dir), 0o600)
            .keep_existing(),
        PlannedFile::new(".ssh/known_hosts", String::new(), 0o600).keep_existing(),
        PlannedFile::new(
            ".config/1Password/agent.toml",
            templates::onepassword_config(name),
            0o600,
        ),
        PlannedFile::new("bin/ssh", templates::SSH_WRAPPER.to_string(), 0o755),
        PlannedFile::new(".gitignore", templates::GITIGNORE.to_string(), 0o644),
        PlannedFile::new(
            "README.md",
            templates::readme(name, opts.template, &created, &display_path(dir)),
            0o644,
        ),
        PlannedFile::new(".env.example", templates::ENV_EXAMPLE.to_string(), 0o644),
    ]
}

/// Create the layout directories under `dir` and return the ones that were
/// missing. With `dry_run` nothing is created.
pub fn ensure_dirs(dir: &Path, dry_run: bool) -> Result<Vec<&'static str>> {
    let mut created = Vec::new();
    for sub in templates::PROFILE_DIRS {
        let full = dir.join(sub);
        if full.is_dir() {
            continue;
        }
        if !dry_run {
            fs::create_dir_all(&full)?;
            log::debug!("created {}", full.display());
        }
        created.push(*sub);
    }
    Ok(created)
}

/// Write a new profile into `dir`.
pub fn write(dir: &Path, files: &[PlannedFile]) -> Result<()> {
    ensure_dirs(dir, false)?;
    set_mode(&dir.join(".ssh"), SSH_DIR_MODE)?;

    for file in files {
        let full = dir.join(&file.path);
        if file.keep_existing && full.exists() {
            log::debug!("keeping existing {}", full.display());
            continue;
        }
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, &file.content)?;
        set_mode(&full, file.mode)?;
        log::debug!("wrote {} ({:o})", full.display(), file.mode);
    }

    Ok(())
}

/// Set Unix permission bits. No-op elsewhere.
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}
