//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which writes the
//! `~/.profile-manager` configuration file and creates the profiles root.
//!
//! ## Functionality
//!
//! - **Default Root**: Uses `~/workspaces/profiles` unless told otherwise
//! - **Explicit Root**: `--profiles-dir` accepts `~` and `$VAR` references
//! - **Interactive Setup**: Prompts for the root with the default pre-filled
//! - **Overwrite Guard**: An existing configuration is only replaced after
//!   confirmation or with `--force`

use anyhow::{Context, Result};
use clap::Args;
use std::fs;

use shell_profiler::config::{self, Config};
use shell_profiler::defaults;
use shell_profiler::output;

use super::prompt;

/// Initialize the profile manager configuration
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Set profiles directory path
    #[arg(long, value_name = "PATH")]
    pub profiles_dir: Option<String>,

    /// Interactive setup (prompt for paths)
    #[arg(short, long)]
    pub interactive: bool,

    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the `init` command.
pub fn execute(args: InitArgs) -> Result<()> {
    let config_path = config::config_path()?;

    if config_path.exists() && !args.force {
        output::warning("Configuration file already exists");
        println!("  Location: {}", config_path.display());
        println!();

        let overwrite = prompt::confirm(
            "Overwrite existing configuration?",
            false,
            "Use --force to overwrite the existing configuration",
        )?;
        if !overwrite {
            output::info("Initialization cancelled");
            return Ok(());
        }
    }

    let default_dir = defaults::default_profiles_dir();
    let raw_dir = if args.interactive {
        println!("Profile Manager Initialization");
        println!();
        let answer = prompt::input(
            "Profiles directory",
            &default_dir.to_string_lossy(),
        )?;
        println!();
        Some(answer).filter(|a| !a.is_empty())
    } else {
        args.profiles_dir
    };

    let profiles_dir = match raw_dir {
        Some(raw) => config::expand_path(&raw),
        None => default_dir,
    };

    fs::create_dir_all(&profiles_dir).with_context(|| {
        format!(
            "failed to create profiles directory: {}",
            profiles_dir.display()
        )
    })?;

    let config = Config {
        profiles_dir: profiles_dir.clone(),
    };
    let config_path = config.save().context("failed to save config")?;

    output::success("Profile manager initialized successfully");
    println!();
    println!("  Profiles directory: {}", profiles_dir.display());
    println!("  Config file: {}", config_path.display());
    println!();
    output::info("Next steps:");
    println!("  1. Create your first profile: shell-profiler create my-profile");
    println!("  2. Navigate to it: cd <profiles-dir>/my-profile");
    println!("  3. Allow direnv: direnv allow");

    Ok(())
}
