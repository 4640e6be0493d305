//! # Shell Profiler CLI
//!
//! This is the binary entry point for the `shell-profiler` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The core profile logic lives in the `lib.rs` library crate, so the binary
//! stays a thin layer of argument handling, prompts and printing.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
