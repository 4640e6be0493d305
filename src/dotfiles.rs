//! # Dotfiles
//!
//! Discovery and editing of the configuration files inside a profile.
//!
//! Known files are reported in a fixed order with a description. Any other
//! hidden regular file in the profile root is appended, sorted by name.
//! Known entries may be directories (`.config/claude`, `.gcloud/...`).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::{DateTime, Local};

use crate::error::{Error, Result};

/// Known dotfiles, relative to the profile root, with descriptions.
pub const KNOWN: &[(&str, &str)] = &[
    (".envrc", "direnv configuration - environment variables"),
    (".envrc.local", "Local direnv overrides"),
    (".env", "Environment variables (secrets)"),
    (".env.example", "Environment variables template"),
    (".gitconfig", "Git configuration - user name, email, aliases"),
    (".gitignore", "Git ignore patterns"),
    (".ssh/config", "SSH client configuration"),
    (".aws/config", "AWS CLI configuration"),
    (".aws/credentials", "AWS credentials (secrets)"),
    (".azure/config", "Azure CLI configuration"),
    (".azure/clouds.config", "Azure CLI cloud configuration"),
    (".gcloud/configurations", "Google Cloud SDK configurations"),
    (".gcloud/credentials", "Google Cloud SDK credentials"),
    (".config/claude", "Claude Code configuration"),
    (".config/gemini", "Gemini CLI configuration"),
    (".kube/config", "Kubernetes configuration"),
    (".terraformrc", "Terraform CLI configuration"),
    (".config/1Password/agent.toml", "1Password SSH agent configuration"),
];

/// A dotfile found in a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dotfile {
    /// Path relative to the profile root, with `/` separators.
    pub relative: String,
    pub path: PathBuf,
    pub description: Option<&'static str>,
}

impl Dotfile {
    /// `relative - description`, as shown in pickers.
    pub fn label(&self) -> String {
        match self.description {
            Some(description) => format!("{} - {}", self.relative, description),
            None => self.relative.clone(),
        }
    }
}

/// All dotfiles present in `profile_dir`.
pub fn find(profile_dir: &Path) -> Result<Vec<Dotfile>> {
    let mut found: Vec<Dotfile> = KNOWN
        .iter()
        .filter(|(rel, _)| profile_dir.join(rel).exists())
        .map(|(rel, description)| Dotfile {
            relative: rel.to_string(),
            path: profile_dir.join(rel),
            description: Some(*description),
        })
        .collect();

    let mut extra = Vec::new();
    for entry in fs::read_dir(profile_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') || name == ".git" || !entry.file_type()?.is_file() {
            continue;
        }
        if found.iter().any(|d| d.relative == name) {
            continue;
        }
        extra.push(Dotfile {
            relative: name,
            path: entry.path(),
            description: None,
        });
    }
    extra.sort_by(|a, b| a.relative.cmp(&b.relative));
    found.extend(extra);

    Ok(found)
}

/// Look up `name` among `dotfiles` by relative or absolute path.
pub fn resolve<'a>(dotfiles: &'a [Dotfile], profile: &str, name: &str) -> Result<&'a Dotfile> {
    let wanted = name.trim_start_matches("./");
    dotfiles
        .iter()
        .find(|d| d.relative == wanted || d.path == Path::new(name))
        .ok_or_else(|| Error::DotfileNotFound {
            profile: profile.to_string(),
            file: name.to_string(),
        })
}

/// Human-readable size with binary units: `512 B`, `1.5 KB`, `2.0 MB`.
pub fn format_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    if size < UNIT {
        return format!("{size} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let prefix = ['K', 'M', 'G', 'T', 'P', 'E'][exp];
    format!("{:.1} {}B", size as f64 / div as f64, prefix)
}

/// Size and modification time of a dotfile, when readable.
pub fn metadata(path: &Path) -> Option<(u64, String)> {
    let meta = fs::metadata(path).ok()?;
    let modified = meta
        .modified()
        .ok()
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    Some((meta.len(), modified))
}

/// Editor to use: the explicit choice, then `$EDITOR`, `$VISUAL`, then the
/// first of `vim`, `nano`, `vi` found on `PATH`.
pub fn resolve_editor(explicit: Option<&str>) -> Result<String> {
    if let Some(editor) = explicit.filter(|e| !e.trim().is_empty()) {
        return Ok(editor.to_string());
    }
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = std::env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }
    ["vim", "nano", "vi"]
        .into_iter()
        .find(|candidate| which::which(candidate).is_ok())
        .map(str::to_string)
        .ok_or(Error::NoEditor)
}

/// Run `editor path` attached to the terminal. The editor string may carry
/// arguments, e.g. `code --wait`.
pub fn open(editor: &str, path: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(Error::NoEditor)?;

    log::debug!("{editor} {}", path.display());
    let failed = |stderr: String| Error::Command {
        program: program.to_string(),
        command: path.display().to_string(),
        stderr,
    };
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| failed(e.to_string()))?;
    if !status.success() {
        return Err(failed(format!("exited with {status}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_find_known_order_then_extras() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join(".gitconfig"), "").unwrap();
        fs::write(dir.join(".envrc"), "").unwrap();
        fs::write(dir.join(".zshrc"), "").unwrap();
        fs::write(dir.join(".bashrc"), "").unwrap();
        fs::write(dir.join("README.md"), "").unwrap();
        fs::create_dir_all(dir.join(".config/claude")).unwrap();
        fs::create_dir_all(dir.join(".hidden-dir")).unwrap();
        fs::create_dir_all(dir.join(".git")).unwrap();

        let names: Vec<_> = find(dir).unwrap().into_iter().map(|d| d.relative).collect();
        assert_eq!(
            names,
            vec![".envrc", ".gitconfig", ".config/claude", ".bashrc", ".zshrc"]
        );
    }

    #[test]
    fn test_resolve() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".envrc"), "").unwrap();
        let files = find(temp.path()).unwrap();

        assert_eq!(resolve(&files, "acme", ".envrc").unwrap().relative, ".envrc");
        assert_eq!(resolve(&files, "acme", "./.envrc").unwrap().relative, ".envrc");
        let abs = temp.path().join(".envrc");
        assert!(resolve(&files, "acme", &abs.to_string_lossy()).is_ok());

        let err = resolve(&files, "acme", ".nope").unwrap_err();
        assert_eq!(err.to_string(), "dotfile '.nope' not found in profile 'acme'");
    }

    #[test]
    fn test_label() {
        let dotfile = Dotfile {
            relative: ".env".to_string(),
            path: PathBuf::from("/p/.env"),
            description: Some("Environment variables (secrets)"),
        };
        assert_eq!(dotfile.label(), ".env - Environment variables (secrets)");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    #[serial]
    fn test_resolve_editor_precedence() {
        std::env::set_var("EDITOR", "from-editor");
        std::env::set_var("VISUAL", "from-visual");
        assert_eq!(resolve_editor(Some("explicit")).unwrap(), "explicit");
        assert_eq!(resolve_editor(None).unwrap(), "from-editor");

        std::env::remove_var("EDITOR");
        assert_eq!(resolve_editor(None).unwrap(), "from-visual");
        std::env::remove_var("VISUAL");
    }
}
