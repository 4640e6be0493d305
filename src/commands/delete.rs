//! # Delete Command Implementation
//!
//! This module implements the `delete` subcommand, which removes a profile
//! directory and everything in it.
//!
//! ## Safety
//!
//! - A summary of what will go (file counts, `.env` secrets, scripts) is
//!   printed first
//! - `--dry-run` lists the files instead of deleting them
//! - Deletion asks for confirmation unless `--force` is given

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::fs;

use shell_profiler::error::Error;
use shell_profiler::output;
use shell_profiler::profile;
use shell_profiler::suggestions;
use shell_profiler::summary;

use super::{load_store, prompt};

/// Maximum number of files listed by a dry run.
const DRY_RUN_LISTING: usize = 20;

/// Delete a workspace profile
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Name of the profile to delete (interactive selection if omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be deleted without deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Disable interactive mode
    #[arg(long)]
    pub no_interactive: bool,
}

/// Execute the `delete` command.
pub fn execute(args: DeleteArgs) -> Result<()> {
    let store = load_store()?;
    let known = store.list()?;

    let name = match args.name {
        Some(name) => name,
        None if args.force || args.dry_run || args.no_interactive => {
            anyhow::bail!(
                "profile name is required\n\nhint: Pass the name of the profile to delete"
            );
        }
        None => {
            if known.is_empty() {
                anyhow::bail!("no profiles found to delete");
            }
            prompt::select_profile(&known, "Select profile to delete")?
        }
    };
    profile::validate_name(&name)?;

    let dir = store.path(&name);
    if !dir.is_dir() {
        return Err(suggestions::explain(
            Error::ProfileNotFound { name, path: dir },
            &known,
        ));
    }

    if profile::active_profile().as_deref() == Some(name.as_str()) {
        output::warning("You are currently in this profile!");
        output::info("The profile will remain active until you leave the directory");
    }

    output::info(format!("Profile to delete: {name}"));
    println!("  Location: {}", dir.display());
    let (files, dirs) = summary::count_entries(&dir);
    println!("  Files: {files}");
    println!("  Directories: {dirs}");
    if dir.join(".env").is_file() {
        println!("  {}", style("⚠ Contains .env file (may have secrets)").yellow());
    }
    let scripts = summary::count_executables(&dir.join("bin"));
    if scripts > 0 {
        println!(
            "  {}",
            style(format!("⚠ Contains {scripts} executable script(s)")).yellow()
        );
    }

    if args.dry_run {
        output::info("DRY RUN - Nothing will be deleted");
        println!();
        println!("Would delete:");
        for path in summary::list_files(&dir, DRY_RUN_LISTING) {
            println!("  - {}", path.display());
        }
        if files > DRY_RUN_LISTING {
            println!("  ... and {} more files", files - DRY_RUN_LISTING);
        }
        return Ok(());
    }

    if !args.force {
        let confirmed = prompt::confirm(
            &format!(
                "This will permanently delete the profile '{name}' and all its files! Are you sure?"
            ),
            false,
            "Use --force to delete without confirmation",
        )?;
        if !confirmed {
            output::info("Deletion cancelled");
            return Ok(());
        }
    }

    output::info(format!("Deleting profile: {name}"));
    fs::remove_dir_all(&dir)
        .with_context(|| format!("failed to delete profile: {}", dir.display()))?;
    output::success(format!("Profile deleted: {name}"));

    if store.list()?.is_empty() {
        output::info("No profiles remaining");
    }

    Ok(())
}
