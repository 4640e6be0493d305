//! # Profile Summaries
//!
//! Read-only facts about a profile gathered for `list`, `select` and
//! `delete`: template and creation stamp from the README, git identity from
//! the profile `.gitconfig`, and a few counts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::git;

/// Everything `list` shows about one profile.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub path: PathBuf,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_email: Option<String>,
    pub has_gitconfig: bool,
    /// Assignments in `.env`, when the file exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_vars: Option<usize>,
    pub scripts: usize,
}

impl ProfileSummary {
    /// Gather the summary for the profile `name` at `dir`.
    pub fn gather(name: &str, dir: &Path, active: Option<&str>) -> Self {
        let (template, created) = readme_metadata(&dir.join("README.md"));
        let gitconfig = dir.join(".gitconfig");
        let has_gitconfig = gitconfig.is_file();
        let (git_name, git_email) = if has_gitconfig {
            (
                git::config_value(&gitconfig, "user.name"),
                git::config_value(&gitconfig, "user.email"),
            )
        } else {
            (None, None)
        };

        Self {
            name: name.to_string(),
            path: dir.to_path_buf(),
            active: active == Some(name),
            template,
            created,
            git_name,
            git_email,
            has_gitconfig,
            env_vars: fs::read_to_string(dir.join(".env"))
                .ok()
                .map(|c| count_assignments(&c)),
            scripts: count_executables(&dir.join("bin")),
        }
    }

    /// Path of the profile `.gitconfig`.
    pub fn gitconfig_path(&self) -> PathBuf {
        self.path.join(".gitconfig")
    }
}

/// `Template:` and `Created:` values from a profile README.
pub fn readme_metadata(readme: &Path) -> (Option<String>, Option<String>) {
    let Ok(content) = fs::read_to_string(readme) else {
        return (None, None);
    };
    parse_readme_metadata(&content)
}

fn parse_readme_metadata(content: &str) -> (Option<String>, Option<String>) {
    let field = |prefix: &str| {
        content
            .lines()
            .find_map(|l| l.strip_prefix(prefix))
            .map(|v| v.trim().to_string())
    };
    (field("Template:"), field("Created:"))
}

/// Non-empty, non-comment lines.
pub fn count_assignments(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .count()
}

/// Regular files in `dir` with any execute bit set.
pub fn count_executables(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| m.is_file() && is_executable(m))
        .count()
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    false
}

/// Files and directories under `dir`, the root included in the directory
/// count.
pub fn count_entries(dir: &Path) -> (usize, usize) {
    let mut files = 0;
    let mut dirs = 0;
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() {
            dirs += 1;
        } else {
            files += 1;
        }
    }
    (files, dirs)
}

/// Up to `limit` file paths under `dir`, in walk order.
pub fn list_files(dir: &Path, limit: usize) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .take(limit)
        .map(|e| e.into_path())
        .collect()
}
