//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `shell-profiler` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `execute` function is the main entry point for the command. It loads
//! the configuration, resolves the profile it works on, and calls into the
//! `shell_profiler` library for the actual work. Printing and prompting stay
//! here; the library never talks to the terminal.

pub mod completions;
pub mod create;
pub mod delete;
pub mod dotfiles;
pub mod info;
pub mod init;
pub mod list;
pub mod restore;
pub mod select;
pub mod status;
pub mod sync;
pub mod update;

mod prompt;

use std::path::PathBuf;

use anyhow::Result;

use shell_profiler::config::Config;
use shell_profiler::profile::{self, ProfileStore};
use shell_profiler::suggestions;

/// Open the profile store for the configured profiles root.
pub(crate) fn load_store() -> Result<ProfileStore> {
    let config = Config::load()?;
    log::debug!("profiles root: {}", config.profiles_dir.display());
    Ok(ProfileStore::new(config.profiles_dir))
}

/// Resolve the profile a command works on.
///
/// With a name, the name must be valid and the profile must exist and contain
/// `.envrc`. Without one the user picks from the existing profiles, which
/// needs a terminal.
pub(crate) fn resolve_profile(
    store: &ProfileStore,
    name: Option<String>,
    prompt_message: &str,
) -> Result<(String, PathBuf)> {
    let known = store.list()?;
    let name = match name {
        Some(name) => name,
        None => {
            if known.is_empty() {
                return Err(suggestions::no_profiles(store.root()));
            }
            prompt::select_profile(&known, prompt_message)?
        }
    };

    profile::validate_name(&name)?;
    let dir = store
        .require(&name)
        .map_err(|e| suggestions::explain(e, &known))?;
    Ok((name, dir))
}

/// Like [`resolve_profile`], but a missing name is an error instead of a
/// prompt.
pub(crate) fn require_named_profile(
    store: &ProfileStore,
    name: Option<String>,
) -> Result<(String, PathBuf)> {
    let Some(name) = name else {
        anyhow::bail!(
            "profile name is required\n\nhint: Pass the profile name, or drop --no-interactive to pick one"
        );
    };
    resolve_profile(store, Some(name), "")
}
