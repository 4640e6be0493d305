//! # Update Command Implementation
//!
//! This module implements the `update` subcommand, which upgrades an
//! existing profile to the current layout.
//!
//! ## Functionality
//!
//! - **Profile Selection**: Prompts for the profile when no name is given
//! - **Backups**: Copies `.envrc`, `.env`, `.gitconfig` and `.gitignore` to
//!   `.backups/update_<timestamp>/` first, unless `--no-backup`
//! - **Dry Run**: `--dry-run` reports the same changes without writing them
//! - **Idempotent**: Running it twice reports "already up to date"

use anyhow::Result;
use clap::Args;

use shell_profiler::backup;
use shell_profiler::output;
use shell_profiler::update::{self, UpdateStep};

use super::{load_store, prompt, resolve_profile};

/// Update an existing profile with new features
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Name of the profile to update (interactive selection if omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Continue without prompting when the backup fails
    #[arg(short, long)]
    pub force: bool,

    /// Preview changes without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Skip creating backup before updating
    #[arg(long)]
    pub no_backup: bool,
}

/// Execute the `update` command.
pub fn execute(args: UpdateArgs) -> Result<()> {
    let store = load_store()?;
    let (name, dir) = resolve_profile(&store, args.name, "Select profile to update")?;

    output::info(format!("Updating profile: {name}"));
    println!("  Location: {}", dir.display());
    println!();

    if !args.no_backup && !args.dry_run {
        match backup::create(&dir) {
            Ok(created) => output::info(format!("Backup created: {}", created.path.display())),
            Err(e) => {
                output::warning(format!("Failed to create backup: {e}"));
                if !args.force {
                    let proceed = prompt::confirm(
                        "Continue without backup?",
                        false,
                        "Use --force to continue without a backup",
                    )?;
                    if !proceed {
                        anyhow::bail!("update cancelled");
                    }
                }
            }
        }
    }

    let steps = update::apply(&dir, &name, args.dry_run)?;
    report(&steps, args.dry_run);
    Ok(())
}

fn report(steps: &[UpdateStep], dry_run: bool) {
    if dry_run {
        output::info("DRY RUN - No changes were made");
        if steps.is_empty() {
            println!("  Profile is already up to date");
        } else {
            println!();
            println!("Would update:");
            for step in steps {
                println!("  - {step}");
            }
        }
        return;
    }

    if steps.is_empty() {
        output::info("Profile is already up to date");
        return;
    }

    output::success("Profile updated successfully");
    println!();
    println!("Updates applied:");
    for step in steps {
        println!("  ✓ {step}");
    }
}
