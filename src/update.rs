//! # Profile Upgrades
//!
//! Brings an existing profile up to the current layout without touching
//! anything the user wrote. Each step is a pure text transformation that
//! returns `None` when the file is already current, so a dry run and a real
//! run share the same decisions.
//!
//! ## Steps
//!
//! 1.  **Directories**: create layout directories that are missing and
//!     re-apply `0700` on `.ssh`.
//! 2.  **`.envrc`**: move tool variables out (see [`migrate_envrc`]) and make
//!     sure `.env` is loaded.
//! 3.  **`.env`**: add tool variables that are not assigned yet.
//! 4.  **`.gitignore`**: add secret patterns for newer tools.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::profile::ENVRC;
use crate::scaffold;
use crate::templates::{self, TOOL_VARS};

/// A change made (or, in a dry run, that would be made) by [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStep {
    CreatedDirs(Vec<&'static str>),
    Envrc,
    Env,
    Gitignore,
}

impl fmt::Display for UpdateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStep::CreatedDirs(dirs) => write!(f, "Created directories: {}", dirs.join(", ")),
            UpdateStep::Envrc => f.write_str("Updated .envrc (moved tool-specific vars to .env)"),
            UpdateStep::Env => {
                f.write_str("Updated .env with tool-specific environment variables")
            }
            UpdateStep::Gitignore => f.write_str("Updated .gitignore with new patterns"),
        }
    }
}

/// Upgrade the profile in `dir`. With `dry_run` nothing is written.
pub fn apply(dir: &Path, name: &str, dry_run: bool) -> Result<Vec<UpdateStep>> {
    let mut steps = Vec::new();

    let created = scaffold::ensure_dirs(dir, dry_run)?;
    let ssh_dir = dir.join(".ssh");
    if !dry_run && ssh_dir.is_dir() {
        if let Err(e) = scaffold::set_mode(&ssh_dir, scaffold::SSH_DIR_MODE) {
            log::warn!("failed to set SSH directory permissions: {e}");
        }
    }
    if !created.is_empty() {
        steps.push(UpdateStep::CreatedDirs(created));
    }

    let envrc_path = dir.join(ENVRC);
    let envrc = fs::read_to_string(&envrc_path)?;
    if let Some(migrated) = migrate_envrc(&envrc) {
        write_unless_dry(&envrc_path, &migrated, dry_run)?;
        steps.push(UpdateStep::Envrc);
    }

    let env_path = dir.join(".env");
    let env = read_optional(&env_path)?;
    if let Some(merged) = merge_env_file(env.as_deref(), name) {
        write_unless_dry(&env_path, &merged, dry_run)?;
        steps.push(UpdateStep::Env);
    }

    let gitignore_path = dir.join(".gitignore");
    let gitignore = read_optional(&gitignore_path)?;
    if let Some(merged) = merge_gitignore(gitignore.as_deref()) {
        write_unless_dry(&gitignore_path, &merged, dry_run)?;
        steps.push(UpdateStep::Gitignore);
    }

    Ok(steps)
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_unless_dry(path: &Path, content: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        log::debug!("dry run: would write {}", path.display());
        return Ok(());
    }
    fs::write(path, content)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

fn exports_tool_var(line: &str) -> bool {
    templates::migrated_var_names().any(|name| {
        line.contains(&format!("export {name}=")) || line.contains(&format!("export {name} ="))
    })
}

/// Remove tool-variable exports from `.envrc` and ensure `.env` is loaded.
///
/// An export is removed together with the comment lines directly above it
/// (never the shebang) and one blank line after it. Returns `None` when the
/// content is already migrated.
pub fn migrate_envrc(content: &str) -> Option<String> {
    let mut changed = false;
    let mut lines: Vec<&str> = Vec::new();
    let mut skip_blank = false;

    for line in content.split('\n') {
        let trimmed = line.trim();

        if exports_tool_var(trimmed) {
            while let Some(prev) = lines.last().map(|l| l.trim()) {
                if prev.starts_with('#') && !prev.starts_with("#!") {
                    lines.pop();
                } else {
                    break;
                }
            }
            changed = true;
            skip_blank = true;
            continue;
        }

        if skip_blank && trimmed.is_empty() {
            skip_blank = false;
            continue;
        }
        skip_blank = false;
        lines.push(line);
    }

    let loads_env = lines
        .iter()
        .any(|l| l.contains("dotenv_if_exists .env") && !l.contains(".envrc"));
    if !loads_env {
        let anchor = lines.iter().position(|l| {
            l.contains("# Load local overrides")
                || l.contains("dotenv_if_exists .envrc.local")
                || l.contains("# Welcome message")
        });
        let tail = lines.split_off(anchor.unwrap_or(lines.len()));
        lines.extend(templates::DOTENV_BLOCK.iter().copied());
        lines.extend(tail);
        changed = true;
    }

    changed.then(|| lines.join("\n"))
}

/// Add missing tool variables to `.env`.
///
/// A missing or empty file is replaced by a fresh one. Otherwise every
/// variable whose `NAME=` does not occur is appended with its comment.
/// Returns `None` when nothing is missing.
pub fn merge_env_file(existing: Option<&str>, name: &str) -> Option<String> {
    let existing = existing.unwrap_or_default();
    if existing.is_empty() {
        return Some(templates::env_file(name, None));
    }

    let mut content = existing.to_string();
    let mut changed = false;
    for var in TOOL_VARS {
        if !content.contains(&format!("{}=", var.name)) {
            content.push_str(&var.render());
            changed = true;
        }
    }
    changed.then_some(content)
}

/// A block of ignore patterns added together.
struct PatternGroup {
    comment: &'static str,
    patterns: &'static [&'static str],
}

const GITIGNORE_GROUPS: &[PatternGroup] = &[
    PatternGroup {
        comment: "# Azure CLI credentials and sensitive config",
        patterns: &[
            ".azure/config",
            ".azure/clouds.config",
            ".azure/accessTokens.json",
            ".azure/msal_token_cache.json",
            ".azure/azureProfile.json",
        ],
    },
    PatternGroup {
        comment: "# Google Cloud SDK credentials and sensitive config",
        patterns: &[
            ".gcloud/configurations/",
            ".gcloud/credentials",
            ".gcloud/access_tokens.db",
            ".gcloud/legacy_credentials/",
            ".gcloud/logs/",
        ],
    },
    PatternGroup {
        comment: "# Claude Code configuration (may contain API keys and sensitive data)",
        patterns: &[".config/claude/"],
    },
    PatternGroup {
        comment: "# Gemini CLI configuration (may contain API keys and sensitive data)",
        patterns: &[".config/gemini/"],
    },
];

/// Add ignore groups whose patterns are all absent.
///
/// A missing file becomes the full default. Groups are inserted in order
/// before the `# Terraform` section, or appended when there is none.
/// Returns `None` when every group is already covered.
pub fn merge_gitignore(existing: Option<&str>) -> Option<String> {
    let Some(existing) = existing else {
        return Some(templates::GITIGNORE.to_string());
    };

    let mut content = existing.to_string();
    let mut changed = false;
    for group in GITIGNORE_GROUPS {
        let covered = group
            .patterns
            .iter()
            .any(|p| content.contains(p.trim_end_matches('/')));
        if covered {
            continue;
        }

        let mut section = format!("{}\n", group.comment);
        for pattern in group.patterns {
            section.push_str(pattern);
            section.push('\n');
        }
        section.push('\n');

        match content.find("# Terraform") {
            Some(at) => content.insert_str(at, &section),
            None => {
                if !content.is_empty() && !content.ends_with('\n') {
                    content.push('\n');
                }
                content.push_str(&section);
            }
        }
        changed = true;
    }
    changed.then_some(content)
}
