//! # Status Command Implementation
//!
//! This module implements the `status` subcommand: `direnv status` for the
//! current directory, or install instructions when direnv is missing.

use anyhow::Result;
use clap::Args;

use shell_profiler::direnv;

/// Show direnv status
#[derive(Args, Debug)]
pub struct StatusArgs {}

/// Execute the `status` command.
pub fn execute(_args: StatusArgs) -> Result<()> {
    if !direnv::is_installed() {
        println!("direnv is not installed");
        println!();
        println!("Install direnv:");
        println!("  macOS:  brew install direnv");
        println!("  Linux:  sudo apt install direnv");
        println!();
        println!("Then hook it to your shell:");
        println!("  bash:   eval \"$(direnv hook bash)\"");
        println!("  zsh:    eval \"$(direnv hook zsh)\"");
        return Ok(());
    }

    println!("=== direnv Status ===");
    println!();
    direnv::show_status()?;
    Ok(())
}
