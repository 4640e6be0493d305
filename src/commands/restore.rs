//! # Restore Command Implementation
//!
//! This module implements the `restore` subcommand, which copies files from
//! one of the backups `update` leaves in `.backups/` back into the profile.

use anyhow::Result;
use clap::Args;

use shell_profiler::backup::{self, Backup};
use shell_profiler::error::Error;
use shell_profiler::output;

use super::{load_store, prompt, resolve_profile};

/// Restore profile files from an update backup
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Name of the profile to restore (interactive selection if omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,

    /// Preview restore without restoring
    #[arg(long)]
    pub dry_run: bool,

    /// Restore only a specific file (e.g. .envrc)
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,

    /// Restore from a specific dated backup
    #[arg(long, value_name = "YYYY-MM-DD_HH-MM-SS")]
    pub backup_date: Option<String>,
}

/// Execute the `restore` command.
pub fn execute(args: RestoreArgs) -> Result<()> {
    let store = load_store()?;
    let (name, dir) = resolve_profile(&store, args.name, "Select profile to restore")?;

    let backups = backup::list(&dir)?;
    if backups.is_empty() {
        return Err(Error::Backup {
            message: format!("no backups found for profile '{name}'"),
        }
        .into());
    }

    let chosen = match &args.backup_date {
        Some(date) => backup::find(&dir, date)?,
        None => choose_backup(backups)?,
    };

    let files = backup::restorable_files(&chosen, args.file.as_deref())?;
    output::info(format!("Restoring profile: {name}"));
    println!("  Backup: {}", chosen.path.display());
    println!("  Files: {}", files.join(", "));

    if args.dry_run {
        output::info("DRY RUN - Nothing will be restored");
        println!();
        println!("Would restore:");
        for file in &files {
            println!("  - {}", dir.join(file).display());
        }
        return Ok(());
    }

    if !args.force {
        let confirmed = prompt::confirm(
            &format!(
                "Overwrite {} in '{name}' with the backup from {}?",
                files.join(", "),
                chosen.date
            ),
            false,
            "Use --force to restore without confirmation",
        )?;
        if !confirmed {
            output::info("Restore cancelled");
            return Ok(());
        }
    }

    let restored = backup::restore(&dir, &chosen, args.file.as_deref())?;
    output::success(format!(
        "Restored {} file(s) from backup {}",
        restored.len(),
        chosen.date
    ));
    for file in restored {
        println!("  ✓ {file}");
    }

    Ok(())
}

/// Ask which backup to use when attended, otherwise take the newest.
fn choose_backup(mut backups: Vec<Backup>) -> Result<Backup> {
    if backups.len() == 1 || !prompt::is_interactive() {
        return Ok(backups.swap_remove(0));
    }

    let labels: Vec<String> = backups
        .iter()
        .map(|b| format!("{} ({})", b.date, b.files().join(", ")))
        .collect();
    let index = prompt::select(
        "Select backup to restore",
        &labels,
        0,
        "Use --backup-date to pick a backup",
    )?;
    Ok(backups.swap_remove(index))
}
