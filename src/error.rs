//! # Error Handling
//!
//! This module defines the centralized error type for the `shell-profiler`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers the anticipated failure modes of profile management.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all errors the library can
//!   return. Each variant carries the profile name, path, or command involved
//!   so that messages are actionable without extra context.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The binary wraps these errors in `anyhow` and adds `hint:` lines through
//! the `suggestions` module where a fix is obvious.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shell-profiler operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file exists but could not be understood.
    #[error("Configuration error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// The home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// A profile name contains characters outside `[a-zA-Z0-9_-]`.
    #[error("Invalid profile name '{name}': profile name can only contain letters, numbers, hyphens, and underscores")]
    InvalidProfileName { name: String },

    /// An unknown template name was requested.
    #[error("invalid template: {name} (must be: basic, personal, work, or client)")]
    InvalidTemplate { name: String },

    /// The profile directory does not exist.
    #[error("profile '{name}' does not exist at: {}", path.display())]
    ProfileNotFound { name: String, path: PathBuf },

    /// The profile directory exists but is missing its `.envrc`.
    #[error("profile '{name}' does not appear to be a valid profile (missing .envrc)")]
    NotAProfile { name: String },

    /// A profile directory is already present.
    #[error("profile '{name}' already exists at: {} (use --force to overwrite)", path.display())]
    ProfileExists { name: String, path: PathBuf },

    /// No profiles were found under the profiles root.
    #[error("no profiles found in {}", root.display())]
    NoProfiles { root: PathBuf },

    /// A required external executable is not on `PATH`.
    #[error("{tool} is required but not found in PATH")]
    ToolMissing { tool: String },

    /// An external command exited unsuccessfully or could not be spawned.
    #[error("{program} {command} failed: {stderr}")]
    Command {
        program: String,
        command: String,
        stderr: String,
    },

    /// The profile is not a git repository.
    #[error("profile '{name}' is not a git repository")]
    NotARepository { name: String },

    /// The profile repository has no `origin` remote.
    #[error("no remote 'origin' configured for profile '{name}'")]
    NoRemote { name: String },

    /// A backup could not be found or used.
    #[error("Backup error: {message}")]
    Backup { message: String },

    /// The requested dotfile is not part of the profile.
    #[error("dotfile '{file}' not found in profile '{profile}'")]
    DotfileNotFound { profile: String, file: String },

    /// No usable editor was found.
    #[error("no editor found. Set EDITOR or VISUAL environment variable")]
    NoEditor,

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An INI parsing error from the configuration file.
    #[error("INI parsing error: {0}")]
    Ini(#[from] ini::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true when the error means the repository has no `origin`.
    ///
    /// `sync` treats this as a skip rather than a failure.
    pub fn is_missing_remote(&self) -> bool {
        matches!(self, Error::NoRemote { .. })
    }
}
