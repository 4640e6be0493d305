//! # File Templates
//!
//! Generators for every file a new profile starts with. Each function returns
//! the file content as a `String`; writing and permissions are handled by
//! [`crate::scaffold`].
//!
//! The tool-variable table ([`TOOL_VARS`]) is shared with the `update` logic
//! so a freshly created `.env` and a migrated one carry the same variables.

use crate::profile::Template;

/// Directories every profile contains, relative to the profile root.
pub const PROFILE_DIRS: &[&str] = &[
    ".config/1Password",
    ".config/claude",
    ".config/gemini",
    ".ssh",
    ".aws",
    ".azure",
    ".gcloud",
    ".kube",
    "bin",
    "code",
];

/// An environment variable that points a CLI tool at profile-local config.
#[derive(Debug, Clone, Copy)]
pub struct ToolVar {
    pub name: &'static str,
    pub value: &'static str,
    /// Comment block written above the assignment, empty for none.
    pub comment: &'static str,
}

impl ToolVar {
    /// Render as `.env` lines, with a leading blank line when commented.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.comment.is_empty() {
            out.push('\n');
            out.push_str(self.comment);
            out.push('\n');
        }
        out.push_str(self.name);
        out.push('=');
        out.push_str(self.value);
        out.push('\n');
        out
    }
}

/// Tool variables that belong in `.env`, in file order.
pub const TOOL_VARS: &[ToolVar] = &[
    ToolVar {
        name: "GIT_CONFIG_GLOBAL",
        value: r#""$WORKSPACE_HOME/.gitconfig""#,
        comment: "# Git configuration",
    },
    ToolVar {
        name: "GIT_SSH_COMMAND",
        value: r#""ssh -F $WORKSPACE_HOME/.ssh/config""#,
        comment: "# SSH configuration\n# Use workspace-specific SSH config instead of $HOME/.ssh/config",
    },
    ToolVar {
        name: "XDG_CONFIG_HOME",
        value: r#""$WORKSPACE_HOME/.config""#,
        comment: "# XDG Base Directory specification\n# Point all XDG-compliant tools to workspace-specific config",
    },
    ToolVar {
        name: "SSH_AUTH_SOCK",
        value: r#""$HOME/Library/Group Containers/2BUA8C4S2C.com.1password/t/agent.sock""#,
        comment: "# 1Password SSH Agent\n# Point to 1Password SSH agent socket for SSH key management",
    },
    ToolVar {
        name: "AWS_CONFIG_FILE",
        value: r#""$WORKSPACE_HOME/.aws/config""#,
        comment: "# AWS configuration\n# Point AWS CLI and SDKs to workspace-specific config and credentials",
    },
    ToolVar {
        name: "AWS_SHARED_CREDENTIALS_FILE",
        value: r#""$WORKSPACE_HOME/.aws/credentials""#,
        comment: "",
    },
    ToolVar {
        name: "KUBECONFIG",
        value: r#""$WORKSPACE_HOME/.kube/config""#,
        comment: "# Kubernetes configuration\n# Point kubectl to workspace-specific kubeconfig",
    },
    ToolVar {
        name: "TF_CLI_CONFIG_FILE",
        value: r#""$WORKSPACE_HOME/.terraformrc""#,
        comment: "# Terraform configuration\n# Use workspace-specific Terraform CLI config",
    },
    ToolVar {
        name: "AZURE_CONFIG_DIR",
        value: r#""$WORKSPACE_HOME/.azure""#,
        comment: "# Azure CLI configuration\n# Point Azure CLI to workspace-specific config directory",
    },
    ToolVar {
        name: "CLOUDSDK_CONFIG",
        value: r#""$WORKSPACE_HOME/.gcloud""#,
        comment: "# Google Cloud SDK configuration\n# Point gcloud CLI to workspace-specific config directory",
    },
    ToolVar {
        name: "CLAUDE_CONFIG_DIR",
        value: r#""$WORKSPACE_HOME/.config/claude""#,
        comment: "# Claude Code configuration\n# Point Claude Code to workspace-specific config directory",
    },
    ToolVar {
        name: "GEMINI_CONFIG_DIR",
        value: r#""$WORKSPACE_HOME/.config/gemini""#,
        comment: "# Gemini CLI configuration\n# Point Gemini CLI to workspace-specific config directory",
    },
];

/// Variables that are removed from `.envrc` during migration. Superset of
/// [`TOOL_VARS`]: the Terraform plugin cache is only ever written commented.
pub fn migrated_var_names() -> impl Iterator<Item = &'static str> {
    TOOL_VARS
        .iter()
        .map(|v| v.name)
        .chain(std::iter::once("TF_PLUGIN_CACHE_DIR"))
}

/// `.envrc` loaded by direnv when entering the profile.
pub fn envrc(name: &str, template: Template, created: &str) -> String {
    format!(
        r#"#!/usr/bin/env bash
# Workspace profile: {name}
# Template: {template}
# Created: {created}

# Workspace identification
export WORKSPACE_PROFILE="{name}"
export WORKSPACE_HOME="$PWD"

# Add custom bin directory to PATH (before system paths)
# The bin/ssh wrapper uses the profile-specific SSH config
# Git will automatically use bin/ssh since it's first in PATH
PATH_add bin

# Load global profile settings (exports only)
# Environment variables work with direnv, aliases and functions do not
GLOBAL_DIR="$(cd "$(dirname "$PWD")/.global" 2>/dev/null && pwd)"
if [[ -d "$GLOBAL_DIR" ]]; then
    # Source exports (environment variables work with direnv)
    if [[ -f "$GLOBAL_DIR/exports.sh" && -r "$GLOBAL_DIR/exports.sh" ]]; then
        source "$GLOBAL_DIR/exports.sh"
    fi
fi

{dotenv}
# Load local overrides
dotenv_if_exists .envrc.local

# Welcome message
log_status "Loaded workspace profile: $WORKSPACE_PROFILE"
"#,
        dotenv = DOTENV_BLOCK.join("\n"),
    )
}

/// Lines that load `.env` from `.envrc`. The trailing empty entry keeps a
/// blank separator after the block.
pub const DOTENV_BLOCK: &[&str] = &[
    "# Load environment variables from .env file",
    "# Tool-specific paths and secrets belong in .env, not here",
    "dotenv_if_exists .env",
    "",
];

/// Header of a generated `.env`.
pub fn env_header(name: &str, template: Option<Template>) -> String {
    let mut out = format!("# Environment variables for workspace profile: {name}\n");
    if let Some(template) = template {
        out.push_str(&format!("# Template: {template}\n#\n"));
    }
    out.push_str("# This file is loaded by direnv via dotenv_if_exists in .envrc\n");
    out.push_str("# Add tool-specific paths and secrets here (not in .envrc)\n");
    out
}

/// `.env` holding the tool variables.
pub fn env_file(name: &str, template: Option<Template>) -> String {
    let mut out = env_header(name, template);
    for var in TOOL_VARS {
        out.push_str(&var.render());
        if var.name == "TF_CLI_CONFIG_FILE" {
            out.push_str("# Optionally set workspace-specific plugin cache\n");
            out.push_str(
                "# TF_PLUGIN_CACHE_DIR=\"$WORKSPACE_HOME/.terraform.d/plugin-cache\"\n",
            );
        }
    }
    out
}

/// Placeholder written when no git user name is given.
pub const DEFAULT_GIT_NAME: &str = "Your Name";

/// Placeholder written when no git email is given.
pub const DEFAULT_GIT_EMAIL: &str = "your.email@example.com";

/// Profile `.gitconfig`.
pub fn gitconfig(
    name: &str,
    template: Template,
    git_name: Option<&str>,
    git_email: Option<&str>,
) -> String {
    let git_name = git_name.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_GIT_NAME);
    let git_email = git_email
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_GIT_EMAIL);

    let mut out = format!(
        r#"# Git configuration for workspace profile: {name}
# Template: {template}

[user]
    name = {git_name}
    email = {git_email}

[core]
    editor = vim
    autocrlf = input
    whitespace = trailing-space,space-before-tab

[init]
    defaultBranch = main

[push]
    default = current
    autoSetupRemote = true

[pull]
    rebase = false

[fetch]
    prune = true

[merge]
    conflictstyle = diff3

[rebase]
    autoStash = true
    autoSquash = true

[diff]
    algorithm = histogram
    colorMoved = default

[log]
    abbrevCommit = true
    date = iso

[color]
    ui = auto

[alias]
    st = status -sb
    lg = log --graph --pretty=format:'%Cred%h%Creset -%C(yellow)%d%Creset %s %Cgreen(%cr) %C(bold blue)<%an>%Creset' --abbrev-commit
    br = branch -v
    co = checkout
    ci = commit
    cm = commit -m
    amend = commit --amend --no-edit
    last = log -1 HEAD --stat
    undo = reset HEAD~1 --mixed
    aliases = config --get-regexp alias
"#
    );

    let tail = match template {
        Template::Basic => "",
        Template::Personal => {
            r#"
# Personal project settings
[commit]
    verbose = true

[credential]
    helper = cache --timeout=3600
"#
        }
        Template::Work => {
            r#"
# Work project settings
[commit]
    verbose = true
    # Uncomment to enable GPG signing
    # gpgsign = true

[credential]
    helper = cache --timeout=7200
"#
        }
        Template::Client => {
            r#"
# Client project settings
[commit]
    verbose = true
    # gpgsign = true

[credential]
    helper = cache --timeout=3600
"#
        }
    };
    out.push_str(tail);
    out
}

/// Profile SSH config. SSH does not expand variables, so `abs_dir` must be
/// the absolute profile path.
pub fn ssh_config(name: &str, abs_dir: &str) -> String {
    format!(
        r#"# SSH configuration for workspace profile: {name}
# This config is used instead of ~/.ssh/config when this profile is active
#
# Note: SSH config files don't support environment variable expansion.
# All paths are absolute paths to ensure they work regardless of current directory.

# Default settings for all hosts
Host *
    # Use workspace-specific known_hosts file
    UserKnownHostsFile {abs_dir}/.ssh/known_hosts

    # Security settings
    AddKeysToAgent yes
    IdentitiesOnly yes

    # 1Password SSH Agent (commented out by default)
    # IdentityAgent "~/Library/Group Containers/2BUA8C4S2C.com.1password/t/agent.sock"

    # Connection settings
    ServerAliveInterval 60
    ServerAliveCountMax 3

    # Compression
    Compression yes

# Example: GitHub with profile-specific key
# Host github.com
#     HostName github.com
#     User git
#     IdentityFile {abs_dir}/.ssh/id_ed25519_github
#     IdentitiesOnly yes

# Example: GitLab with profile-specific key
# Host gitlab.com
#     HostName gitlab.com
#     User git
#     IdentityFile {abs_dir}/.ssh/id_ed25519_gitlab
#     IdentitiesOnly yes

# Example: Personal server
# Host myserver
#     HostName example.com
#     User myuser
#     Port 22
#     IdentityFile {abs_dir}/.ssh/id_ed25519_server

# Example: Jump host (bastion)
# Host bastion
#     HostName bastion.example.com
#     User admin
#     IdentityFile {abs_dir}/.ssh/id_ed25519_bastion
#
# Host internal-server
#     HostName internal.example.com
#     User admin
#     ProxyJump bastion
#     IdentityFile {abs_dir}/.ssh/id_ed25519_internal
"#
    )
}

/// 1Password SSH agent config.
pub fn onepassword_config(name: &str) -> String {
    format!(
        r#"# 1Password SSH Agent configuration for workspace profile: {name}
# This config is used when this profile is active

# SSH Agent configuration
[[ssh-keys]]
# Example: Add your SSH keys from 1Password
# vault = "Private"
# item = "GitHub SSH Key"
# account = "my.1password.com"

# Multiple keys can be configured
# [[ssh-keys]]
# vault = "Work"
# item = "Work GitHub Key"

# CLI configuration
# [cli]
# Uncomment to configure CLI authentication
# account = "my.1password.com"

# Notes:
# - SSH keys stored in 1Password can be used for Git operations
# - The SSH agent will automatically load keys when profile is active
# - Use 'op item list' to find vault and item names
# - See: https://developer.1password.com/docs/ssh/agent/
"#
    )
}

/// `bin/ssh` wrapper that forces the profile SSH config.
pub const SSH_WRAPPER: &str = r#"#!/usr/bin/env bash
# SSH wrapper that uses workspace-specific SSH config
# This script is in PATH before system ssh, ensuring profile isolation

# Get the directory where this script is located
SCRIPT_DIR="$(cd "$(dirname "${BASH_SOURCE[0]}")" && pwd)"
WORKSPACE_HOME="$(dirname "$SCRIPT_DIR")"

# Use workspace-specific SSH config
exec /usr/bin/ssh -F "$WORKSPACE_HOME/.ssh/config" "$@"
"#;

/// Default profile `.gitignore`.
pub const GITIGNORE: &str = r#"# Workspace profile gitignore

# Environment files with secrets
.env
.envrc.local

# SSH keys and sensitive files
.ssh/id_*
.ssh/*.pem
.ssh/*.key
.ssh/known_hosts

# AWS credentials and sensitive config
.aws/credentials
.aws/cli/cache
.aws/sso/cache

# Azure CLI credentials and sensitive config
.azure/config
.azure/clouds.config
.azure/accessTokens.json
.azure/msal_token_cache.json
.azure/azureProfile.json

# Google Cloud SDK credentials and sensitive config
.gcloud/configurations/
.gcloud/credentials
.gcloud/access_tokens.db
.gcloud/legacy_credentials/
.gcloud/logs/

# Claude Code configuration (may contain API keys and sensitive data)
.config/claude/

# Gemini CLI configuration (may contain API keys and sensitive data)
.config/gemini/

# Terraform
.terraform/
.terraform.lock.hcl
*.tfstate
*.tfstate.*
*.tfvars
.terraform.d/plugin-cache/
.terraform.d/checkpoint_cache
.terraform.d/checkpoint_signature

# Terragrunt
.terragrunt-cache/
*.tfplan

# Kubernetes
.kube/cache
.kube/http-cache

# OS files
.DS_Store
Thumbs.db

# Editor files
.vscode/
.idea/
*.swp
*.swo
*~

# Build artifacts
bin/
dist/
build/
*.log
"#;

/// `.env.example` with commented credential placeholders.
pub const ENV_EXAMPLE: &str = r#"# Example environment variables
# Copy this to .env and fill in your secrets

# AWS credentials
# AWS_ACCESS_KEY_ID=your-access-key
# AWS_SECRET_ACCESS_KEY=your-secret-key
# AWS_DEFAULT_REGION=us-east-1

# Azure credentials (optional - can also use 'az login')
# AZURE_CLIENT_ID=your-client-id
# AZURE_CLIENT_SECRET=your-client-secret
# AZURE_TENANT_ID=your-tenant-id
# AZURE_SUBSCRIPTION_ID=your-subscription-id

# Google Cloud credentials (optional - can also use 'gcloud auth login')
# GOOGLE_APPLICATION_CREDENTIALS=/path/to/service-account-key.json
# GCP_PROJECT=your-project-id
# GCP_REGION=us-central1
# GCP_ZONE=us-central1-a

# Claude Code / Anthropic API credentials
# ANTHROPIC_API_KEY=your-anthropic-api-key

# Gemini CLI / Google AI API credentials
# GEMINI_API_KEY=your-gemini-api-key
# GOOGLE_AI_API_KEY=your-google-ai-api-key

# API keys
# API_KEY=your-api-key
# API_SECRET=your-api-secret

# Database
# DATABASE_URL=postgresql://localhost:5432/mydb
# REDIS_URL=redis://localhost:6379
"#;

/// Profile `README.md`. `display_path` is the profile path with the home
/// directory abbreviated to `~`.
pub fn readme(name: &str, template: Template, created: &str, display_path: &str) -> String {
    format!(
        r#"# Workspace Profile: {name}

Template: {template}
Created: {created}

## Setup

1. Navigate to this directory:
   ```bash
   cd "{display_path}"
   ```

2. Allow direnv (first time only):
   ```bash
   direnv allow
   ```

3. Verify the profile is loaded:
   ```bash
   echo $WORKSPACE_PROFILE
   git config user.email
   ```

## Customization

- Edit .gitconfig for git settings
- Edit .ssh/config for SSH configuration
- Edit .envrc for environment variables
- Add scripts to bin/ directory (automatically in PATH)
- Add secrets to .env file (gitignored)
- Add SSH keys to .ssh/ directory

## Environment Variables

### Workspace
- WORKSPACE_PROFILE: {name}
- WORKSPACE_HOME: Path to this directory
- XDG_CONFIG_HOME: Path to profile-specific XDG config directory (.config)

### Git
- GIT_CONFIG_GLOBAL: Path to custom .gitconfig
- Git automatically uses bin/ssh wrapper (first in PATH) for SSH operations

### AWS
- AWS_CONFIG_FILE: Path to profile-specific AWS config
- AWS_SHARED_CREDENTIALS_FILE: Path to profile-specific AWS credentials

### Kubernetes
- KUBECONFIG: Path to profile-specific kubeconfig file

### Terraform
- TF_CLI_CONFIG_FILE: Path to profile-specific Terraform CLI config
- TF_PLUGIN_CACHE_DIR: (Optional) Path to Terraform plugin cache

### Azure
- AZURE_CONFIG_DIR: Path to profile-specific Azure CLI config directory
- Azure CLI will automatically use profile-specific settings and credentials

### Google Cloud
- CLOUDSDK_CONFIG: Path to profile-specific Google Cloud SDK config directory
- gcloud CLI will automatically use profile-specific settings and credentials

### Claude Code
- CLAUDE_CONFIG_DIR: Path to profile-specific Claude Code config directory
- Claude Code will automatically use profile-specific settings

### Gemini CLI
- GEMINI_CONFIG_DIR: Path to profile-specific Gemini CLI config directory
- Gemini CLI will automatically use profile-specific settings

## Next Steps

1. Update git configuration in .gitconfig:
   - Set your name and email
   - Configure GPG signing if needed
   - Add custom aliases

2. Configure SSH in .ssh/config:
   - Add host-specific settings
   - Configure SSH keys for this profile
   - Set up jump hosts if needed

3. Add SSH keys (optional):
   ```bash
   ssh-keygen -t ed25519 -f .ssh/id_ed25519_{name} -C "email@example.com"
   ```

4. Configure 1Password SSH Agent in .config/1Password/agent.toml:
   - Uncomment and configure SSH keys from your 1Password vaults
   - Use 'op item list' to find vault and item names
   - Keys will be automatically loaded when profile is active

5. Configure AWS credentials in .aws/:
   - Edit .aws/config for AWS profiles
   - Add credentials to .env or .aws/credentials
   - AWS CLI will automatically use profile-specific settings

6. Configure Azure CLI in .azure/:
   - Run 'az login' to authenticate (credentials stored in .azure/)
   - Use 'az account set --subscription <name>' to set active subscription

7. Configure Google Cloud SDK in .gcloud/:
   - Run 'gcloud auth login' to authenticate (credentials stored in .gcloud/)
   - Run 'gcloud config set project <project-id>' to set active project

8. Configure Claude Code in .config/claude/ and Gemini CLI in .config/gemini/:
   - Settings and API keys are isolated per profile

9. Configure Kubernetes in .kube/:
   - Copy or generate kubeconfig to .kube/config

10. XDG-compliant tools (optional):
   - Many tools respect XDG_CONFIG_HOME (neovim, tmux, bat, etc.)
   - Add configs to .config/<tool>/

11. Create .env for secrets (cloud credentials, API tokens, etc.)

12. Add custom scripts to bin/ directory
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envrc_identifies_profile() {
        let content = envrc("acme", Template::Work, "2026-01-02 03:04:05 UTC");
        assert!(content.starts_with("#!/usr/bin/env bash\n"));
        assert!(content.contains("export WORKSPACE_PROFILE=\"acme\""));
        assert!(content.contains("# Template: work"));
        assert!(content.contains("# Created: 2026-01-02 03:04:05 UTC"));
        assert!(content.contains("PATH_add bin"));
        assert!(content.contains("dotenv_if_exists .env\n"));
        assert!(content.contains("dotenv_if_exists .envrc.local"));
    }

    #[test]
    fn test_envrc_exports_no_tool_vars() {
        let content = envrc("acme", Template::Basic, "now");
        for name in migrated_var_names() {
            assert!(
                !content.contains(&format!("export {name}=")),
                ".envrc should not export {name}"
            );
        }
    }

    #[test]
    fn test_env_file_contains_every_tool_var() {
        let content = env_file("acme", Some(Template::Client));
        for var in TOOL_VARS {
            assert!(content.contains(&format!("{}={}", var.name, var.value)));
        }
        assert!(content.contains("# Template: client"));
        assert!(content.contains("# TF_PLUGIN_CACHE_DIR="));
    }

    #[test]
    fn test_tool_var_render() {
        let rendered = TOOL_VARS[0].render();
        assert_eq!(
            rendered,
            "\n# Git configuration\nGIT_CONFIG_GLOBAL=\"$WORKSPACE_HOME/.gitconfig\"\n"
        );
        let uncommented = TOOL_VARS
            .iter()
            .find(|v| v.name == "AWS_SHARED_CREDENTIALS_FILE")
            .unwrap()
            .render();
        assert!(uncommented.starts_with("AWS_SHARED_CREDENTIALS_FILE="));
    }

    #[test]
    fn test_gitconfig_placeholders() {
        let content = gitconfig("acme", Template::Basic, None, Some(""));
        assert!(content.contains("name = Your Name"));
        assert!(content.contains("email = your.email@example.com"));
        assert!(!content.contains("[credential]"));
    }

    #[test]
    fn test_gitconfig_template_tail() {
        let work = gitconfig("acme", Template::Work, Some("Jo"), Some("jo@acme.test"));
        assert!(work.contains("name = Jo"));
        assert!(work.contains("email = jo@acme.test"));
        assert!(work.contains("# Work project settings"));
        assert!(work.contains("cache --timeout=7200"));

        let personal = gitconfig("me", Template::Personal, None, None);
        assert!(personal.contains("# Personal project settings"));
        assert!(personal.contains("cache --timeout=3600"));
    }

    #[test]
    fn test_gitconfig_alias_format_is_literal() {
        let content = gitconfig("acme", Template::Basic, None, None);
        assert!(content.contains("%Cred%h%Creset"));
    }

    #[test]
    fn test_ssh_config_uses_absolute_paths() {
        let content = ssh_config("acme", "/home/me/profiles/acme");
        assert!(content.contains("UserKnownHostsFile /home/me/profiles/acme/.ssh/known_hosts"));
        assert!(!content.contains("$WORKSPACE_HOME"));
    }

    #[test]
    fn test_readme_metadata_lines() {
        let content = readme("acme", Template::Personal, "2026-01-02 03:04:05 UTC", "~/p/acme");
        assert!(content.contains("\nTemplate: personal\n"));
        assert!(content.contains("\nCreated: 2026-01-02 03:04:05 UTC\n"));
        assert!(content.contains("cd \"~/p/acme\""));
        assert!(content.contains("id_ed25519_acme"));
    }

    #[test]
    fn test_gitignore_covers_secrets() {
        assert!(GITIGNORE.contains("\n.env\n"));
        assert!(GITIGNORE.contains(".aws/credentials"));
        assert!(GITIGNORE.contains("# Terraform\n"));
    }
}
