//! # Output Configuration
//!
//! This module controls CLI output appearance and provides the status-line
//! helpers every command prints through.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shell_profiler::output::{self, OutputConfig};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! config.apply();
//!
//! output::info("Creating profile: acme (template: basic)");
//! output::success("Profile created successfully: acme");
//! ```
//!
//! Styling goes through `console`, so once [`OutputConfig::apply`] has run
//! the helpers emit plain text whenever colors are off.

use std::env;
use std::fmt::Display;

use console::style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colored output should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Make `console` styling follow this configuration on both streams.
    pub fn apply(&self) {
        console::set_colors_enabled(self.use_color);
        console::set_colors_enabled_stderr(self.use_color);
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Format an `INFO:` line.
pub fn format_info(msg: impl Display) -> String {
    style(format!("INFO: {msg}")).blue().to_string()
}

/// Format a `SUCCESS:` line.
pub fn format_success(msg: impl Display) -> String {
    style(format!("SUCCESS: {msg}")).green().to_string()
}

/// Format a `WARNING:` line.
pub fn format_warning(msg: impl Display) -> String {
    style(format!("WARNING: {msg}")).yellow().bold().to_string()
}

/// Print an informational line to stdout.
pub fn info(msg: impl Display) {
    println!("{}", format_info(msg));
}

/// Print a success line to stdout.
pub fn success(msg: impl Display) {
    println!("{}", format_success(msg));
}

/// Print a warning line to stdout.
pub fn warning(msg: impl Display) {
    println!("{}", format_warning(msg));
}

/// Print a `=== title ===` heading.
pub fn heading(title: impl Display) {
    println!("{}", style(format!("=== {title} ===")).blue());
}

/// Style a field label such as `Git:` or `Size:`.
pub fn label(text: &str) -> String {
    style(text).blue().to_string()
}
