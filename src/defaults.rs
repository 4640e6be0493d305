//! Default values for shell-profiler configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Name of the configuration file stored in the home directory.
pub const CONFIG_FILENAME: &str = ".profile-manager";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "SHELL_PROFILER_CONFIG";

/// Environment variable that overrides the configured profiles root.
pub const PROFILES_DIR_ENV: &str = "SHELL_PROFILER_PROFILES_DIR";

/// Profiles root relative to the home directory when nothing is configured.
pub const DEFAULT_PROFILES_SUBDIR: &str = "workspaces/profiles";

/// Set by the profile `.envrc` to the active profile name.
pub const ACTIVE_PROFILE_ENV: &str = "WORKSPACE_PROFILE";

/// Set by the profile `.envrc` to the active profile directory.
pub const ACTIVE_HOME_ENV: &str = "WORKSPACE_HOME";

/// Returns the default profiles root: `~/workspaces/profiles`.
///
/// Falls back to a relative `workspaces/profiles` if the home directory
/// cannot be determined.
pub fn default_profiles_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(DEFAULT_PROFILES_SUBDIR)
}

/// Returns the configuration file path.
///
/// `SHELL_PROFILER_CONFIG` wins when set, otherwise `~/.profile-manager`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(CONFIG_FILENAME))
}
