//! # Dotfiles Command Implementation
//!
//! This module implements the `dotfiles` subcommand family, which lists the
//! configuration files of a profile and opens one of them in an editor.
//!
//! Both the profile and the file may be given positionally or with
//! `--profile` / `--file`; whatever is missing is picked interactively.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use shell_profiler::dotfiles::{self, Dotfile};
use shell_profiler::output;
use shell_profiler::suggestions;

use super::{load_store, prompt, resolve_profile};

/// List and edit profile dotfiles
#[derive(Args, Debug)]
pub struct DotfilesArgs {
    #[command(subcommand)]
    pub command: DotfilesCommand,
}

#[derive(Subcommand, Debug)]
pub enum DotfilesCommand {
    /// List all dotfiles in a profile
    #[command(visible_alias = "ls")]
    List {
        /// Profile name (interactive selection if omitted)
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Profile name
        #[arg(short, long = "profile", value_name = "NAME", conflicts_with = "name")]
        profile: Option<String>,
    },

    /// Edit a dotfile
    #[command(visible_alias = "e")]
    Edit(EditArgs),
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Profile name (interactive selection if omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Dotfile to edit, relative to the profile (interactive if omitted)
    #[arg(value_name = "FILE")]
    pub file_arg: Option<String>,

    /// Profile name
    #[arg(short, long = "profile", value_name = "NAME", conflicts_with = "name")]
    pub profile: Option<String>,

    /// File name
    #[arg(short, long = "file", value_name = "FILE", conflicts_with = "file_arg")]
    pub file: Option<String>,

    /// Editor to use (default: $EDITOR, $VISUAL, or vim)
    #[arg(short, long, value_name = "EDITOR")]
    pub editor: Option<String>,
}

/// Execute the `dotfiles` command.
pub fn execute(args: DotfilesArgs) -> Result<()> {
    match args.command {
        DotfilesCommand::List { name, profile } => list(name.or(profile)),
        DotfilesCommand::Edit(edit_args) => edit(edit_args),
    }
}

fn list(name: Option<String>) -> Result<()> {
    let store = load_store()?;
    let (name, dir) = resolve_profile(&store, name, "Select profile")?;

    let found = dotfiles::find(&dir)?;
    if found.is_empty() {
        output::info(format!("No dotfiles found in profile '{name}'"));
        return Ok(());
    }

    output::heading(format!("Dotfiles in profile: {name}"));
    println!();
    for dotfile in &found {
        print_dotfile(dotfile);
        println!();
    }
    println!(
        "{}",
        style(format!("Total: {} dotfile(s)", found.len())).blue()
    );
    Ok(())
}

fn print_dotfile(dotfile: &Dotfile) {
    println!("  {}", style(&dotfile.relative).cyan());
    if let Some((size, modified)) = dotfiles::metadata(&dotfile.path) {
        println!("    {} {}", output::label("Size:"), dotfiles::format_size(size));
        println!("    {} {modified}", output::label("Modified:"));
    }
    if let Some(description) = dotfile.description {
        println!("    {} {description}", output::label("Description:"));
    }
}

fn edit(args: EditArgs) -> Result<()> {
    let store = load_store()?;
    let (name, dir) = resolve_profile(&store, args.name.or(args.profile), "Select profile")?;

    let found = dotfiles::find(&dir)?;
    if found.is_empty() {
        anyhow::bail!("no dotfiles found in profile '{name}'");
    }

    let target = match args.file_arg.or(args.file) {
        Some(file) => dotfiles::resolve(&found, &name, &file)
            .map_err(|e| suggestions::explain(e, &[]))?
            .clone(),
        None => {
            let labels: Vec<String> = found.iter().map(Dotfile::label).collect();
            let index = prompt::select(
                "Select dotfile to edit",
                &labels,
                0,
                "Pass the file name, e.g. 'shell-profiler dotfiles edit <profile> .gitconfig'",
            )?;
            found[index].clone()
        }
    };

    let editor = dotfiles::resolve_editor(args.editor.as_deref())?;
    output::info(format!("Opening {} with {editor}...", target.relative));
    println!("  Path: {}", target.path.display());
    println!();

    dotfiles::open(&editor, &target.path)?;
    output::success(format!("Finished editing {}", target.relative));
    Ok(())
}
