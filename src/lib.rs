//! # Shell Profiler Library
//!
//! This library provides the core functionality for managing workspace
//! profiles: per-project directories holding environment configuration
//! (`.envrc`, `.env`, `.gitconfig`, SSH and cloud CLI config) that direnv
//! loads when you `cd` into them. It is designed to be used by the
//! `shell-profiler` command-line tool.
//!
//! ## Quick Example
//!
//! ```no_run
//! use shell_profiler::config::Config;
//! use shell_profiler::profile::{ProfileStore, Template};
//! use shell_profiler::scaffold::{self, ScaffoldOptions};
//!
//! let config = Config::load().unwrap();
//! let store = ProfileStore::new(&config.profiles_dir);
//!
//! let opts = ScaffoldOptions {
//!     name: "acme".to_string(),
//!     template: Template::Work,
//!     ..Default::default()
//! };
//! let dir = store.path(&opts.name);
//! scaffold::write(&dir, &scaffold::plan(&dir, &opts)).unwrap();
//!
//! assert!(store.contains("acme"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`, `defaults`)**: the single persisted setting,
//!   the profiles root, stored in `~/.profile-manager`.
//! - **Profiles (`profile`)**: a directory under the root is a profile iff it
//!   contains `.envrc`. `ProfileStore` lists and resolves them.
//! - **Scaffolding (`templates`, `scaffold`)**: file generators and the code
//!   that writes a new profile with the right permissions.
//! - **Upgrades (`update`, `backup`)**: in-place migration of older profiles,
//!   guarded by dated backups that `restore` can copy back.
//! - **External tools (`git`, `direnv`)**: subprocess wrappers. Neither tool
//!   is reimplemented.
//! - **Inspection (`summary`, `dotfiles`)**: read-only views used by the
//!   listing and editing commands.
//! - **CLI support (`output`, `suggestions`)**: styled status lines and
//!   errors that carry `hint:` lines.

pub mod backup;
pub mod config;
pub mod defaults;
pub mod direnv;
pub mod dotfiles;
pub mod error;
pub mod git;
pub mod output;
pub mod profile;
pub mod scaffold;
pub mod suggestions;
pub mod summary;
pub mod templates;
pub mod update;

#[cfg(test)]
mod profile_proptest;
