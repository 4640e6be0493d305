//! # Create Command Implementation
//!
//! This module implements the `create` subcommand, which scaffolds a new
//! workspace profile under the profiles root.
//!
//! ## Functionality
//!
//! - **Templates**: `basic`, `personal`, `work` and `client` shape the
//!   generated `.gitconfig` and README
//! - **Interactive by Default**: Without any option the command asks for the
//!   template, git identity and git setup; `--interactive` forces the wizard
//!   even when options are given
//! - **Dry Run**: `--dry-run` describes the profile without touching disk
//! - **Git Setup**: `--init-git` and `--git-remote` turn the new profile into
//!   a repository; failures there only warn

use anyhow::Result;
use clap::Args;

use shell_profiler::error::Error;
use shell_profiler::output;
use shell_profiler::profile::{self, Template};
use shell_profiler::scaffold::{self, ScaffoldOptions};

use super::{load_store, prompt, sync};

/// Create a new workspace profile
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the profile to create
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Use template: basic, personal, work, client (default: basic)
    #[arg(short, long, value_name = "TYPE")]
    pub template: Option<Template>,

    /// Set git user.name in .gitconfig
    #[arg(long, value_name = "NAME")]
    pub git_name: Option<String>,

    /// Set git user.email in .gitconfig
    #[arg(long, value_name = "EMAIL")]
    pub git_email: Option<String>,

    /// Prompt for all configuration values
    #[arg(short, long)]
    pub interactive: bool,

    /// Disable interactive mode
    #[arg(long, conflicts_with = "interactive")]
    pub no_interactive: bool,

    /// Overwrite existing profile if it exists
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be created without creating it
    #[arg(long)]
    pub dry_run: bool,

    /// Initialize git repository after creation
    #[arg(long)]
    pub init_git: bool,

    /// Initialize git repository with remote URL
    #[arg(long, value_name = "URL")]
    pub git_remote: Option<String>,
}

impl CreateArgs {
    /// The wizard runs when asked for, or when no option was given at all.
    fn wants_wizard(&self) -> bool {
        if self.interactive {
            return true;
        }
        !(self.force
            || self.template.is_some()
            || self.git_name.is_some()
            || self.git_email.is_some()
            || self.no_interactive
            || self.dry_run
            || self.init_git
            || self.git_remote.is_some())
    }
}

/// Answers collected before anything is written.
#[derive(Debug, Default)]
struct Plan {
    options: ScaffoldOptions,
    init_git: bool,
    git_remote: Option<String>,
}

/// Execute the `create` command.
pub fn execute(args: CreateArgs) -> Result<()> {
    profile::validate_name(&args.name)?;

    let store = load_store()?;
    let dir = store.path(&args.name);
    if dir.exists() && !args.force {
        return Err(Error::ProfileExists {
            name: args.name,
            path: dir,
        }
        .into());
    }

    let wizard = args.wants_wizard();
    let mut plan = Plan {
        options: ScaffoldOptions {
            name: args.name.clone(),
            template: args.template.unwrap_or_default(),
            git_name: args.git_name.filter(|v| !v.is_empty()),
            git_email: args.git_email.filter(|v| !v.is_empty()),
        },
        init_git: args.init_git || args.git_remote.is_some(),
        git_remote: args.git_remote.filter(|v| !v.is_empty()),
    };
    if wizard {
        run_wizard(&mut plan)?;
    }

    let opts = &plan.options;
    if args.dry_run {
        output::info("DRY RUN - Nothing will be created");
        println!();
        println!("Would create:");
        println!("  Profile directory: {}", dir.display());
        println!("  .envrc file with WORKSPACE_PROFILE={}", opts.name);
        println!("  .gitconfig with template: {}", opts.template);
        if let Some(git_name) = &opts.git_name {
            println!("  Git user.name: {git_name}");
        }
        if let Some(git_email) = &opts.git_email {
            println!("  Git user.email: {git_email}");
        }
        if plan.init_git {
            println!("  Git repository");
        }
        if let Some(remote) = &plan.git_remote {
            println!("  Git remote: {remote}");
        }
        return Ok(());
    }

    output::info(format!(
        "Creating profile: {} (template: {})",
        opts.name, opts.template
    ));

    let files = scaffold::plan(&dir, opts);
    for file in &files {
        log::info!("creating {}", file.path.display());
    }
    scaffold::write(&dir, &files)?;

    if plan.init_git {
        if let Err(e) = sync::init_repository(&opts.name, &dir, plan.git_remote.as_deref()) {
            output::warning(format!("Failed to initialize git: {e:#}"));
        }
    }

    output::success(format!("Profile created successfully: {}", opts.name));
    println!();
    output::info("Next steps:");
    println!("  1. cd {}", dir.display());
    println!("  2. direnv allow");
    println!("  3. Edit .gitconfig as needed");
    println!("  4. echo $WORKSPACE_PROFILE to verify");
    println!();
    output::info(format!("Profile location: {}", dir.display()));

    Ok(())
}

fn run_wizard(plan: &mut Plan) -> Result<()> {
    let labels: Vec<String> = Template::ALL
        .iter()
        .map(|t| format!("{} - {}", t, t.description()))
        .collect();
    let current = Template::ALL
        .iter()
        .position(|t| *t == plan.options.template)
        .unwrap_or(0);
    let hint = "Pass --no-interactive (or any option such as --template) to skip the prompts";
    let choice = prompt::select("Select template", &labels, current, hint)?;
    plan.options.template = Template::ALL[choice];

    let git_name = prompt::input(
        "Git user name (press Enter to skip)",
        plan.options.git_name.as_deref().unwrap_or_default(),
    )?;
    plan.options.git_name = Some(git_name).filter(|v| !v.is_empty());

    let git_email = prompt::input(
        "Git user email (press Enter to skip)",
        plan.options.git_email.as_deref().unwrap_or_default(),
    )?;
    plan.options.git_email = Some(git_email).filter(|v| !v.is_empty());

    plan.init_git = prompt::confirm(
        "Initialize git repository after creation?",
        plan.init_git,
        hint,
    )?;
    if plan.init_git {
        let remote = prompt::input(
            "Git remote URL (press Enter to skip)",
            plan.git_remote.as_deref().unwrap_or_default(),
        )?;
        plan.git_remote = Some(remote).filter(|v| !v.is_empty());
    } else {
        plan.git_remote = None;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: CreateArgs,
    }

    fn parse(argv: &[&str]) -> CreateArgs {
        let mut full = vec!["create"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_wizard_is_default_without_options() {
        assert!(parse(&["acme"]).wants_wizard());
    }

    #[test]
    fn test_any_option_disables_wizard() {
        for flag in [
            &["acme", "--force"][..],
            &["acme", "--template", "work"],
            &["acme", "--git-name", "Jane"],
            &["acme", "--git-email", "jane@example.com"],
            &["acme", "--no-interactive"],
            &["acme", "--dry-run"],
            &["acme", "--init-git"],
            &["acme", "--git-remote", "git@example.com:me/acme.git"],
        ] {
            assert!(!parse(flag).wants_wizard(), "{flag:?}");
        }
    }

    #[test]
    fn test_interactive_flag_forces_wizard() {
        assert!(parse(&["acme", "--template", "work", "-i"]).wants_wizard());
    }

    #[test]
    fn test_template_is_validated_by_parser() {
        let result = Harness::try_parse_from(["create", "acme", "--template", "enterprise"]);
        let message = result.err().unwrap().to_string();
        assert!(message.contains("invalid template: enterprise"));
    }
}
