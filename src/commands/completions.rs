//! # Completions Command Implementation
//!
//! Prints a completion script for `shell-profiler` to stdout. Install it
//! wherever the shell looks for completions:
//!
//! ```bash
//! shell-profiler completions bash > ~/.local/share/bash-completion/completions/shell-profiler
//! shell-profiler completions zsh > ~/.zfunc/_shell-profiler
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell: bash, zsh, fish, powershell or elvish
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let mut stdout = io::stdout().lock();
    clap_complete::generate(args.shell, &mut cmd, bin_name, &mut stdout);
    stdout.flush()?;
    Ok(())
}
