//! # Profiles
//!
//! A profile is a directory directly under the profiles root that contains a
//! `.envrc` file. That file is the only membership test; everything else in
//! the layout is optional from the store's point of view.
//!
//! [`ProfileStore`] answers the questions every command asks first: which
//! profiles exist, where a named profile lives, and whether it is the one the
//! current shell has loaded.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::defaults;
use crate::error::{Error, Result};

/// File whose presence marks a directory as a profile.
pub const ENVRC: &str = ".envrc";

/// Profile flavour, which selects template-specific git settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    /// Minimal configuration
    #[default]
    Basic,
    /// Personal projects
    Personal,
    /// Work projects
    Work,
    /// Client projects
    Client,
}

impl Template {
    /// All templates in menu order.
    pub const ALL: [Template; 4] = [
        Template::Basic,
        Template::Personal,
        Template::Work,
        Template::Client,
    ];

    /// Name used on the command line and in generated files.
    pub fn as_str(self) -> &'static str {
        match self {
            Template::Basic => "basic",
            Template::Personal => "personal",
            Template::Work => "work",
            Template::Client => "client",
        }
    }

    /// One-line description for interactive menus.
    pub fn description(self) -> &'static str {
        match self {
            Template::Basic => "Minimal configuration",
            Template::Personal => "Personal projects",
            Template::Work => "Work projects",
            Template::Client => "Client projects",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidTemplate {
                name: s.to_string(),
            })
    }
}

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("static regex"))
}

/// Check that `name` only uses letters, digits, `-` and `_`.
pub fn validate_name(name: &str) -> Result<()> {
    if name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidProfileName {
            name: name.to_string(),
        })
    }
}

/// Returns true when `dir` holds a `.envrc` file.
pub fn is_profile_dir(dir: &Path) -> bool {
    dir.join(ENVRC).is_file()
}

/// The profile the current shell has loaded, taken from `WORKSPACE_PROFILE`.
pub fn active_profile() -> Option<String> {
    std::env::var(defaults::ACTIVE_PROFILE_ENV)
        .ok()
        .filter(|v| !v.is_empty())
}

/// Read-only view over the profiles root.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Create a store rooted at `root`. The directory does not need to exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The profiles root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the profiles root exists.
    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Directory a profile with this name would occupy.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Names of all profiles, sorted.
    ///
    /// Errors only when the root exists but cannot be read; a missing root
    /// yields an empty list.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root_exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == ".git" || !entry.path().is_dir() {
                continue;
            }
            if is_profile_dir(&entry.path()) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Like [`list`](Self::list) but an empty result is an error.
    pub fn list_nonempty(&self) -> Result<Vec<String>> {
        let names = self.list()?;
        if names.is_empty() {
            return Err(Error::NoProfiles {
                root: self.root.clone(),
            });
        }
        Ok(names)
    }

    /// Whether `name` is an existing profile.
    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && name != ".git" && is_profile_dir(&self.path(name))
    }

    /// Resolve `name` to its directory, requiring a real profile.
    pub fn require(&self, name: &str) -> Result<PathBuf> {
        let dir = self.path(name);
        if !dir.is_dir() {
            return Err(Error::ProfileNotFound {
                name: name.to_string(),
                path: dir,
            });
        }
        if !is_profile_dir(&dir) {
            return Err(Error::NotAProfile {
                name: name.to_string(),
            });
        }
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_profile(root: &Path, name: &str) {
        fs::create_dir_all(root.join(name)).unwrap();
        fs::write(root.join(name).join(ENVRC), "export WORKSPACE_PROFILE=x\n").unwrap();
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("my-project").is_ok());
        assert!(validate_name("client_42").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("has space").is_err());
        assert!(validate_name("../escape").is_err());
        assert!(validate_name("dot.name").is_err());
    }

    #[test]
    fn test_template_from_str() {
        assert_eq!("work".parse::<Template>().unwrap(), Template::Work);
        assert_eq!("basic".parse::<Template>().unwrap(), Template::Basic);
        assert!("Work".parse::<Template>().is_err());
        assert_eq!(Template::default(), Template::Basic);
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::new(temp.path().join("absent"));
        assert!(store.list().unwrap().is_empty());
        assert!(store.list_nonempty().is_err());
    }

    #[test]
    fn test_list_requires_envrc() {
        let temp = TempDir::new().unwrap();
        make_profile(temp.path(), "zeta");
        make_profile(temp.path(), "alpha");
        fs::create_dir_all(temp.path().join("not-a-profile")).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git").join(ENVRC), "").unwrap();
        fs::write(temp.path().join("stray-file"), "").unwrap();

        let store = ProfileStore::new(temp.path());
        assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
        assert!(store.contains("alpha"));
        assert!(!store.contains("not-a-profile"));
        assert!(!store.contains(".git"));
    }

    #[test]
    fn test_require() {
        let temp = TempDir::new().unwrap();
        make_profile(temp.path(), "acme");
        fs::create_dir_all(temp.path().join("bare")).unwrap();
        let store = ProfileStore::new(temp.path());

        assert_eq!(store.require("acme").unwrap(), temp.path().join("acme"));
        assert!(matches!(
            store.require("missing"),
            Err(Error::ProfileNotFound { .. })
        ));
        assert!(matches!(
            store.require("bare"),
            Err(Error::NotAProfile { .. })
        ));
    }
}
