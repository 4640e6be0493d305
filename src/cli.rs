//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use shell_profiler::direnv;
use shell_profiler::output::OutputConfig;
use shell_profiler::suggestions;

use crate::commands;

/// Workspace Profile Manager - manage workspace profiles with direnv
#[derive(Parser, Debug)]
#[command(name = "shell-profiler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        global = true,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize the profile manager configuration
    Init(commands::init::InitArgs),

    /// Create a new workspace profile
    #[command(visible_aliases = ["new", "add"])]
    Create(commands::create::CreateArgs),

    /// Update an existing profile with new features
    #[command(visible_alias = "upgrade")]
    Update(commands::update::UpdateArgs),

    /// List all workspace profiles
    #[command(visible_alias = "ls")]
    List(commands::list::ListArgs),

    /// Select and switch to a profile
    #[command(visible_alias = "use")]
    Select(commands::select::SelectArgs),

    /// Delete a workspace profile
    #[command(visible_aliases = ["remove", "rm"])]
    Delete(commands::delete::DeleteArgs),

    /// Restore profile files from an update backup
    Restore(commands::restore::RestoreArgs),

    /// Show the currently active profile
    #[command(visible_aliases = ["current", "show"])]
    Info(commands::info::InfoArgs),

    /// Show direnv status
    Status(commands::status::StatusArgs),

    /// Synchronize profiles with git remotes
    Sync(commands::sync::SyncArgs),

    /// List and edit profile dotfiles
    Dotfiles(commands::dotfiles::DotfilesArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Commands {
    /// Whether the command needs direnv on `PATH` before it runs.
    fn requires_direnv(&self) -> bool {
        !matches!(
            self,
            Commands::Init(_) | Commands::Status(_) | Commands::Completions(_)
        )
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        OutputConfig::from_env_and_flag(&self.color).apply();

        if self.command.requires_direnv() {
            direnv::require().map_err(|e| suggestions::explain(e, &[]))?;
        }

        match self.command {
            Commands::Init(args) => commands::init::execute(args),
            Commands::Create(args) => commands::create::execute(args),
            Commands::Update(args) => commands::update::execute(args),
            Commands::List(args) => commands::list::execute(args),
            Commands::Select(args) => commands::select::execute(args),
            Commands::Delete(args) => commands::delete::execute(args),
            Commands::Restore(args) => commands::restore::execute(args),
            Commands::Info(args) => commands::info::execute(args),
            Commands::Status(args) => commands::status::execute(args),
            Commands::Sync(args) => commands::sync::execute(args),
            Commands::Dotfiles(args) => commands::dotfiles::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr. `RUST_LOG` takes precedence over
/// `--log-level` when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
