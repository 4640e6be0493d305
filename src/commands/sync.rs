//! # Sync Command Implementation
//!
//! This module implements the `sync` subcommand family, which keeps profile
//! directories in git repositories. Profiles are expected to live in private
//! remotes; the commands only drive the system `git`.
//!
//! ## Subcommands
//!
//! - `init`: turn a profile into a repository with an initial commit
//! - `pull` / `push`: exchange changes with `origin`; `push` commits a dirty
//!   tree first
//! - `sync`: pull then push, skipping either step when no remote exists
//! - `remote`: add or update `origin`
//! - `status`: per-profile status, or an overview of every repository

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use shell_profiler::error::{self, Error};
use shell_profiler::git;
use shell_profiler::output;
use shell_profiler::profile::ProfileStore;
use shell_profiler::suggestions;

use super::{load_store, require_named_profile, resolve_profile};

const INITIAL_COMMIT: &str = "Initial commit: profile setup";
const UPDATE_COMMIT: &str = "Update profile configuration";

/// Synchronize profiles with git remotes
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(subcommand)]
    pub command: SyncCommand,
}

#[derive(Subcommand, Debug)]
pub enum SyncCommand {
    /// Initialize a repository in the profile directory
    Init {
        #[command(flatten)]
        target: Target,

        /// Add remote URL during initialization
        #[arg(long, value_name = "URL")]
        remote: Option<String>,
    },

    /// Pull changes from the remote repository
    Pull {
        #[command(flatten)]
        target: Target,
    },

    /// Push local changes to the remote repository
    Push {
        #[command(flatten)]
        target: Target,

        /// Force push (use with caution)
        #[arg(short, long)]
        force: bool,
    },

    /// Sync the profile (pull then push)
    Sync {
        #[command(flatten)]
        target: Target,

        /// Force push (use with caution)
        #[arg(short, long)]
        force: bool,
    },

    /// Set or update the remote URL
    Remote {
        #[command(flatten)]
        target: Target,

        /// Remote URL
        #[arg(value_name = "URL")]
        url: Option<String>,

        /// Remote URL (alternative to the positional argument)
        #[arg(long = "remote", value_name = "URL", conflicts_with = "url")]
        remote: Option<String>,
    },

    /// Show sync status and remote information
    Status {
        /// Profile name (all git-backed profiles when omitted)
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
}

/// Profile argument shared by the subcommands.
#[derive(Args, Debug)]
pub struct Target {
    /// Profile name (interactive selection if omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Require the profile name instead of prompting for it
    #[arg(long)]
    pub no_interactive: bool,
}

impl Target {
    fn resolve(self, store: &ProfileStore, action: &str) -> Result<(String, std::path::PathBuf)> {
        if self.no_interactive {
            require_named_profile(store, self.name)
        } else {
            resolve_profile(store, self.name, &format!("Select profile for sync {action}"))
        }
    }
}

/// Execute the `sync` command.
pub fn execute(args: SyncArgs) -> Result<()> {
    let store = load_store()?;

    match args.command {
        SyncCommand::Init { target, remote } => {
            let (name, dir) = target.resolve(&store, "init")?;
            init_repository(&name, &dir, remote.as_deref())
        }
        SyncCommand::Pull { target } => {
            let (name, dir) = target.resolve(&store, "pull")?;
            pull(&name, &dir).map_err(|e| suggestions::explain(e, &[]))
        }
        SyncCommand::Push { target, force } => {
            let (name, dir) = target.resolve(&store, "push")?;
            push(&name, &dir, force).map_err(|e| suggestions::explain(e, &[]))
        }
        SyncCommand::Sync { target, force } => {
            let (name, dir) = target.resolve(&store, "sync")?;
            sync(&name, &dir, force)
        }
        SyncCommand::Remote {
            target,
            url,
            remote,
        } => {
            let (name, dir) = target.resolve(&store, "remote")?;
            let Some(url) = url.or(remote).filter(|u| !u.is_empty()) else {
                anyhow::bail!(
                    "remote URL is required\n\nhint: Run 'shell-profiler sync remote {name} <url>'"
                );
            };
            set_remote(&name, &dir, &url)
        }
        SyncCommand::Status { name: None } => status_all(&store),
        SyncCommand::Status { name: Some(name) } => {
            let (name, dir) = resolve_profile(&store, Some(name), "")?;
            status_one(&name, &dir)
        }
    }
}

/// Turn the profile at `dir` into a git repository with an initial commit.
///
/// Also used by `create --init-git`.
pub(crate) fn init_repository(name: &str, dir: &Path, remote: Option<&str>) -> Result<()> {
    if git::is_repository(dir) {
        output::warning("Profile is already a git repository");
        return Ok(());
    }
    if !git::is_installed() {
        return Err(Error::ToolMissing {
            tool: "git".to_string(),
        }
        .into());
    }

    output::info(format!("Initializing git repository for profile: {name}"));
    git::init(dir)?;

    if let Err(e) = git::add_all(dir) {
        log::debug!("{e}");
        output::warning("No files to add to git");
    }
    if let Err(e) = git::commit(dir, INITIAL_COMMIT) {
        log::debug!("{e}");
        output::info("No changes to commit (this is normal for new profiles)");
    }

    if let Some(url) = remote.filter(|u| !u.is_empty()) {
        git::add_remote(dir, url)?;
        output::success(format!("Added remote: {url}"));
    }

    output::success(format!("Git repository initialized for profile: {name}"));
    Ok(())
}

fn require_remote(name: &str, dir: &Path) -> error::Result<()> {
    if !git::is_repository(dir) {
        return Err(Error::NotARepository {
            name: name.to_string(),
        });
    }
    if git::remote_url(dir).is_none() {
        return Err(Error::NoRemote {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn pull(name: &str, dir: &Path) -> error::Result<()> {
    require_remote(name, dir)?;
    output::info(format!("Pulling changes for profile: {name}"));
    git::pull(dir)?;
    output::success(format!("Pulled changes for profile: {name}"));
    Ok(())
}

fn push(name: &str, dir: &Path, force: bool) -> error::Result<()> {
    require_remote(name, dir)?;
    output::info(format!("Pushing changes for profile: {name}"));

    if git::is_dirty(dir)? {
        output::warning("You have uncommitted changes. Committing them now...");
        git::add_all(dir)?;
        git::commit(dir, UPDATE_COMMIT)?;
    }

    let branch = git::current_branch(dir);
    git::push(dir, &branch, force)?;
    output::success(format!("Pushed changes for profile: {name}"));
    Ok(())
}

fn sync(name: &str, dir: &Path, force: bool) -> Result<()> {
    output::info(format!("Syncing profile: {name}"));

    match pull(name, dir) {
        Err(e) if e.is_missing_remote() => output::info("No remote configured, skipping pull"),
        Err(e) => return Err(suggestions::explain(e, &[]).context("failed to pull")),
        Ok(()) => {}
    }
    match push(name, dir, force) {
        Err(e) if e.is_missing_remote() => output::info("No remote configured, skipping push"),
        Err(e) => return Err(suggestions::explain(e, &[]).context("failed to push")),
        Ok(()) => {}
    }

    output::success(format!("Synced profile: {name}"));
    Ok(())
}

fn set_remote(name: &str, dir: &Path, url: &str) -> Result<()> {
    if !git::is_repository(dir) {
        return Err(suggestions::not_a_repository(name));
    }

    output::info(format!("Setting remote for profile: {name}"));
    if git::upsert_remote(dir, url)? {
        output::success(format!("Updated remote to: {url}"));
    } else {
        output::success(format!("Added remote: {url}"));
    }
    Ok(())
}

fn status_one(name: &str, dir: &Path) -> Result<()> {
    if !git::is_repository(dir) {
        println!("Profile '{name}' is not a git repository");
        return Ok(());
    }

    output::heading(format!("Git Status for Profile: {name}"));
    println!();
    git::show_status(dir)?;

    println!();
    println!("{}", style("Remote Information:").blue());
    if let Err(e) = git::show_remotes(dir) {
        log::debug!("{e}");
    }
    Ok(())
}

fn status_all(store: &ProfileStore) -> Result<()> {
    output::heading("Git Status for All Profiles");
    println!();

    let mut found_any = false;
    for name in store.list()? {
        let dir = store.path(&name);
        if !git::is_repository(&dir) {
            continue;
        }
        found_any = true;

        output::heading(&name);
        match git::status_short(&dir) {
            Ok(status) if status.is_empty() => println!("  (no changes)"),
            Ok(status) => println!("{status}"),
            Err(e) => {
                log::debug!("{e}");
                println!("  (error getting status)");
            }
        }
        match git::remote_url(&dir) {
            Some(url) => println!("  Remote: {url}"),
            None => println!("  Remote: (none)"),
        }
        println!();
    }

    if !found_any {
        println!("No profiles with git repositories found");
    }
    Ok(())
}
