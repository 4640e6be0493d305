//! # Configuration
//!
//! The tool keeps a single piece of persistent state: the path of the
//! profiles root. It lives in `~/.profile-manager` as a section-less INI
//! file:
//!
//! ```text
//! profiles_dir=/home/me/workspaces/profiles
//! ```
//!
//! A missing file is not an error; the default root (`~/workspaces/profiles`)
//! is used instead. Paths may use `~` and `$VAR` / `${VAR}` references, which
//! are expanded when the file is read and before it is written.
//!
//! `SHELL_PROFILER_PROFILES_DIR` overrides the root for a single invocation,
//! and `SHELL_PROFILER_CONFIG` points at a different configuration file.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use ini::Ini;
use regex::Regex;

use crate::defaults;
use crate::error::{Error, Result};

/// Key holding the profiles root.
const PROFILES_DIR_KEY: &str = "profiles_dir";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that contains one sub-directory per profile.
    pub profiles_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles_dir: defaults::default_profiles_dir(),
        }
    }
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// Applies the `SHELL_PROFILER_PROFILES_DIR` override after reading.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        let mut config = Self::load_from(&path)?;

        if let Some(root) = std::env::var_os(defaults::PROFILES_DIR_ENV).filter(|v| !v.is_empty())
        {
            config.profiles_dir = expand_path(&root.to_string_lossy());
            log::debug!(
                "profiles root overridden by {}: {}",
                defaults::PROFILES_DIR_ENV,
                config.profiles_dir.display()
            );
        }

        Ok(config)
    }

    /// Load the configuration from a specific file, falling back to defaults
    /// when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse configuration text. `origin` is only used for error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let ini = Ini::load_from_str(content).map_err(|e| Error::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let profiles_dir = ini
            .general_section()
            .get(PROFILES_DIR_KEY)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(expand_path)
            .unwrap_or_else(defaults::default_profiles_dir);

        Ok(Self { profiles_dir })
    }

    /// Write the configuration to the default location and return that path.
    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut ini = Ini::new();
        ini.with_general_section()
            .set(PROFILES_DIR_KEY, self.profiles_dir.to_string_lossy());
        ini.write_to_file(path)?;

        log::debug!("wrote config to {}", path.display());
        Ok(())
    }
}

/// Path of the configuration file.
pub fn config_path() -> Result<PathBuf> {
    defaults::default_config_path().ok_or(Error::NoHomeDir)
}

fn env_reference() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
            .expect("static regex")
    })
}

/// Expand `~` and environment variable references, then normalise the path
/// lexically (`.` removed, `..` folded where possible).
///
/// Unset variables expand to the empty string.
pub fn expand_path(raw: &str) -> PathBuf {
    let with_home = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => match dirs::home_dir() {
            Some(home) => format!("{}{}", home.display(), rest),
            None => raw.to_string(),
        },
        _ => raw.to_string(),
    };

    let expanded = env_reference().replace_all(&with_home, |caps: &regex::Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        std::env::var(name).unwrap_or_default()
    });

    clean(Path::new(expanded.as_ref()))
}

fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
