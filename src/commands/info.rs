//! # Info Command Implementation
//!
//! This module implements the `info` subcommand, which describes the profile
//! direnv has loaded into the current shell. Everything comes from the
//! environment that the profile `.envrc` and `.env` export.

use anyhow::Result;
use clap::Args;
use std::env;
use std::path::Path;

use shell_profiler::defaults;
use shell_profiler::git;
use shell_profiler::profile;

use super::load_store;

/// Show information about the current profile
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Execute the `info` command.
pub fn execute(_args: InfoArgs) -> Result<()> {
    let Some(name) = profile::active_profile() else {
        return show_inactive();
    };
    let home = env::var(defaults::ACTIVE_HOME_ENV).unwrap_or_default();

    println!("=== Current Workspace Profile ===");
    println!();
    println!("Profile Name:    {name}");
    println!("Profile Home:    {home}");
    println!();

    let git_config = env::var("GIT_CONFIG_GLOBAL").unwrap_or_default();
    println!("Git Configuration:");
    println!("  Config File:   {git_config}");
    if !git_config.is_empty() {
        let file = Path::new(&git_config);
        if file.is_file() {
            let value = |key: &str| git::config_value(file, key).unwrap_or_else(|| "Not set".to_string());
            println!("  User Name:     {}", value("user.name"));
            println!("  User Email:    {}", value("user.email"));
            println!("  Default Branch: {}", value("init.defaultBranch"));
        } else {
            println!("  Warning: Config file not found");
        }
    }
    println!();

    println!("Environment Variables:");
    for (key, value) in workspace_vars(env::vars()) {
        println!("  {key}={value}");
    }
    println!();

    println!("PATH additions:");
    let path = env::var_os("PATH").unwrap_or_default();
    for entry in path_additions(&path, &home) {
        println!("  {}", entry.display());
    }

    Ok(())
}

fn show_inactive() -> Result<()> {
    println!("No workspace profile active");
    println!();
    println!("To activate a profile:");
    println!("  1. cd profiles/<profile-name>");
    println!("  2. direnv allow (first time only)");
    println!();
    println!("Available profiles:");

    let store = load_store()?;
    for name in store.list()? {
        println!("  - {name}");
    }
    Ok(())
}

/// `WORKSPACE_*` variables sorted by name.
fn workspace_vars(vars: impl Iterator<Item = (String, String)>) -> Vec<(String, String)> {
    let mut found: Vec<_> = vars.filter(|(k, _)| k.starts_with("WORKSPACE_")).collect();
    found.sort();
    found
}

/// Entries of `path` that live inside the profile home.
fn path_additions(path: &std::ffi::OsStr, home: &str) -> Vec<std::path::PathBuf> {
    if home.is_empty() {
        return Vec::new();
    }
    env::split_paths(path)
        .filter(|p| p.to_string_lossy().contains(home))
        .collect()
}
