//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which shows the profiles
//! under the profiles root.
//!
//! ## Functionality
//!
//! - **Interactive by Default**: Pick a profile and see its details;
//!   `--verbose`, `--config`, `--json` and `--no-interactive` switch to the
//!   plain listing, as does running without a terminal
//! - **Plain Listing**: Active marker, path, direnv allow state and git
//!   identity for every profile
//! - **Verbose Details**: Template, creation stamp, `.env` assignments and
//!   executable scripts in `bin/`
//! - **JSON Output**: `--json` prints the summaries for scripting

use anyhow::Result;
use clap::Args;
use console::style;

use shell_profiler::defaults;
use shell_profiler::direnv;
use shell_profiler::output;
use shell_profiler::profile::{self, ProfileStore};
use shell_profiler::summary::ProfileSummary;

use super::{load_store, prompt};

/// List all workspace profiles
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show detailed information (disables interactive)
    #[arg(short, long)]
    pub verbose: bool,

    /// Show git configuration paths (disables interactive)
    #[arg(short, long)]
    pub config: bool,

    /// Interactive selection menu (default)
    #[arg(short, long)]
    pub interactive: bool,

    /// Disable interactive mode
    #[arg(long, conflicts_with = "interactive")]
    pub no_interactive: bool,

    /// Print profile summaries as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn wants_menu(&self) -> bool {
        if self.json || self.no_interactive {
            return false;
        }
        self.interactive || !(self.verbose || self.config)
    }
}

/// Which optional fields a profile block shows.
#[derive(Debug, Clone, Copy)]
struct Detail {
    verbose: bool,
    show_config: bool,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs) -> Result<()> {
    let store = load_store()?;
    let names = store.list()?;
    let active = profile::active_profile();

    if args.json {
        let summaries: Vec<ProfileSummary> = names
            .iter()
            .map(|name| ProfileSummary::gather(name, &store.path(name), active.as_deref()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if names.is_empty() {
        let notice = if store.root_exists() {
            "No profiles found"
        } else {
            "No profiles directory found"
        };
        println!("{}", style(notice).yellow());
        println!("Create your first profile with:");
        println!("  shell-profiler create my-profile");
        return Ok(());
    }

    if args.wants_menu() {
        if prompt::is_interactive() {
            return show_selected(&store, &names, active.as_deref(), args.config);
        }
        log::info!("not attached to a terminal, printing the plain listing");
    }

    show_all(&store, &names, active.as_deref(), &args);
    Ok(())
}

fn show_selected(
    store: &ProfileStore,
    names: &[String],
    active: Option<&str>,
    show_config: bool,
) -> Result<()> {
    let selected = prompt::select_profile(names, "Select a profile")?;
    let summary = ProfileSummary::gather(&selected, &store.path(&selected), active);

    output::heading(format!("Profile: {selected}"));
    println!();
    print_fields(
        &summary,
        Detail {
            verbose: true,
            show_config,
        },
    );
    println!();
    Ok(())
}

fn show_all(store: &ProfileStore, names: &[String], active: Option<&str>, args: &ListArgs) {
    output::heading("Workspace Profiles");
    println!();

    if let Some(active) = active {
        println!(
            "{}",
            style(format!("Currently active profile: {active}")).green()
        );
        println!(
            "  Location: {}",
            std::env::var(defaults::ACTIVE_HOME_ENV).unwrap_or_default()
        );
        println!();
    }

    let detail = Detail {
        verbose: args.verbose,
        show_config: args.config,
    };
    for name in names {
        let summary = ProfileSummary::gather(name, &store.path(name), active);
        if summary.active {
            println!(
                "{} {}",
                style(format!("● {name}")).green(),
                style("(active)").yellow()
            );
        } else {
            println!("{}", style(format!("○ {name}")).cyan());
        }
        print_fields(&summary, detail);
        println!();
    }

    println!(
        "{}",
        style(format!("Total profiles: {}", names.len())).blue()
    );
    if !args.verbose {
        println!();
        println!("Run with --verbose for more details");
        println!("Run with --config to show git configuration paths");
    }
}

fn print_fields(summary: &ProfileSummary, detail: Detail) {
    let path = summary.path.display();
    println!("  {} {path}", output::label("Path:"));

    match direnv::is_allowed(&summary.path) {
        Some(true) => println!("  {}", style("✓ direnv allowed").green()),
        Some(false) => println!(
            "  {} (run: cd {path} && direnv allow)",
            style("⚠ direnv not allowed").yellow()
        ),
        None => {}
    }

    if summary.has_gitconfig {
        println!(
            "  {} {} <{}>",
            output::label("Git:"),
            summary.git_name.as_deref().unwrap_or("Not set"),
            summary.git_email.as_deref().unwrap_or("Not set"),
        );
        if detail.show_config {
            println!(
                "    {} {}",
                output::label("Config:"),
                summary.gitconfig_path().display()
            );
        }
    } else {
        println!("  {}", style("⚠ Missing .gitconfig").yellow());
    }

    if !detail.verbose {
        return;
    }
    if let Some(template) = &summary.template {
        println!("  {} {template}", output::label("Template:"));
    }
    if let Some(created) = &summary.created {
        println!("  {} {created}", output::label("Created:"));
    }
    if let Some(count) = summary.env_vars {
        println!(
            "  {} .env file present ({count} lines)",
            output::label("Environment:")
        );
    }
    if summary.scripts > 0 {
        println!(
            "  {} {} executable script(s) in bin/",
            output::label("Scripts:"),
            summary.scripts
        );
    }
}
