//! # Select Command Implementation
//!
//! This module implements the `select` subcommand. A profile is activated
//! by changing into its directory, so selecting one means checking that
//! direnv will load it and printing the `cd` to run.

use anyhow::Result;
use clap::Args;

use shell_profiler::direnv;
use shell_profiler::output;
use shell_profiler::profile;
use shell_profiler::suggestions;

use super::{load_store, resolve_profile};

/// Select and switch to a profile
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Name of the profile to select (interactive selection if omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Automatically allow direnv for the selected profile
    #[arg(long)]
    pub allow_direnv: bool,
}

/// Execute the `select` command.
pub fn execute(args: SelectArgs) -> Result<()> {
    let store = load_store()?;
    store
        .list_nonempty()
        .map_err(|e| suggestions::explain(e, &[]))?;
    let (name, dir) = resolve_profile(&store, args.name, "Select a profile to activate")?;

    if profile::active_profile().as_deref() == Some(name.as_str()) {
        output::info(format!("You are already in profile '{name}'"));
        println!("  Location: {}", dir.display());
        return Ok(());
    }

    println!();
    output::success(format!("Selected profile: {name}"));
    println!("  Location: {}", dir.display());

    if direnv::is_allowed(&dir) == Some(false) {
        println!();
        output::warning("direnv needs to be allowed for this profile");
        if args.allow_direnv {
            match direnv::allow(&dir) {
                Ok(()) => output::success("direnv allowed"),
                Err(e) => {
                    output::warning(format!("Failed to allow direnv: {e}"));
                    println!("  You may need to run 'direnv allow' manually");
                }
            }
        } else {
            println!("  Run 'direnv allow' after changing to the directory");
        }
    }

    println!();
    output::info("To activate this profile:");
    println!("  cd {}", dir.display());
    if args.allow_direnv {
        println!("  (direnv will be allowed automatically)");
    } else {
        println!("  direnv allow  # (first time only)");
    }
    println!();
    output::info("Or use this command:");
    println!("  cd {} && direnv allow", dir.display());

    Ok(())
}
