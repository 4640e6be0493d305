//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Errors should tell users what went
//! wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shell_profiler::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("profile '{}' does not exist", name);
//!
//! // Use:
//! return Err(suggestions::profile_not_found(name, &path, &known));
//! ```

use std::path::Path;

use crate::error::Error;

/// Generate an error for when direnv is not on `PATH`.
///
/// Includes install commands and the shell hook lines.
pub fn direnv_missing() -> anyhow::Error {
    anyhow::anyhow!(
        "direnv is required but not found in PATH\n\n  \
         Install direnv:\n    \
         brew install direnv    # macOS/Linux (Homebrew)\n    \
         apt install direnv     # Debian/Ubuntu\n\n  \
         Then add the shell hook to your shell config:\n    \
         eval \"$(direnv hook bash)\"   # ~/.bashrc\n    \
         eval \"$(direnv hook zsh)\"    # ~/.zshrc\n\n  \
         See https://direnv.net/ for more details"
    )
}

/// Generate an error for an unknown profile name.
///
/// Suggests the closest existing profile when one is within edit distance 2.
pub fn profile_not_found(name: &str, path: &Path, known: &[String]) -> anyhow::Error {
    let candidates: Vec<&str> = known.iter().map(String::as_str).collect();
    let did_you_mean = find_similar(name, &candidates)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "profile '{name}' does not exist at: {path}{did_you_mean}\n\n\
         hint: Run 'shell-profiler list --no-interactive' to see available profiles\n\
         hint: Run 'shell-profiler create {name}' to create it",
        path = path.display()
    )
}

/// Generate an error for when the profiles root holds no profiles.
pub fn no_profiles(root: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "no profiles found in {root}\n\n\
         hint: Create one with 'shell-profiler create <name>'\n\
         hint: Run 'shell-profiler init' to use a different profiles directory",
        root = root.display()
    )
}

/// Generate an error for a sync operation on a profile without git.
pub fn not_a_repository(name: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "profile '{name}' is not a git repository\n\n\
         hint: Run 'shell-profiler sync init {name}' first"
    )
}

/// Generate an error for a profile repository without an `origin` remote.
pub fn no_remote(name: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "no remote 'origin' configured for profile '{name}'\n\n\
         hint: Add one with 'shell-profiler sync remote {name} <url>'"
    )
}

/// Generate an error for a prompt that cannot be shown.
///
/// `what` names the value the prompt would have asked for.
pub fn needs_terminal(what: &str, flag_hint: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "cannot prompt for {what}: not running in an interactive terminal\n\n\
         hint: {flag_hint}"
    )
}

/// Convert a library error into an `anyhow` error, adding hints where the
/// fix is obvious.
pub fn explain(err: Error, known_profiles: &[String]) -> anyhow::Error {
    match err {
        Error::ProfileNotFound { name, path } => profile_not_found(&name, &path, known_profiles),
        Error::NoProfiles { root } => no_profiles(&root),
        Error::ToolMissing { tool } if tool == "direnv" => direnv_missing(),
        Error::NotARepository { name } => not_a_repository(&name),
        Error::NoRemote { name } => no_remote(&name),
        other => other.into(),
    }
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (a_len, b_len) = (a_chars.len(), b_chars.len());

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0usize; b_len + 1];
    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}
