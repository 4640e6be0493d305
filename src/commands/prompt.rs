//! Terminal prompts shared by the commands.
//!
//! All prompts use `dialoguer` with the colorful theme. When the process is
//! not attached to a terminal they fail with a hint instead of blocking on
//! stdin.

use std::io::IsTerminal;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use shell_profiler::suggestions;

/// True when both stdin and stdout are terminals.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && console::user_attended()
}

fn ensure_interactive(what: &str, hint: &str) -> Result<()> {
    if is_interactive() {
        Ok(())
    } else {
        Err(suggestions::needs_terminal(what, hint))
    }
}

/// Pick one of `items`; returns its index.
pub fn select<T: ToString>(
    prompt: &str,
    items: &[T],
    default: usize,
    hint: &str,
) -> Result<usize> {
    ensure_interactive("a selection", hint)?;
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()?;
    Ok(index)
}

/// Pick a profile by name.
pub fn select_profile(names: &[String], prompt: &str) -> Result<String> {
    if !is_interactive() {
        return Err(suggestions::needs_terminal(
            "a profile",
            "Pass the profile name as an argument",
        ));
    }
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(names)
        .default(0)
        .interact()?;
    Ok(names[index].clone())
}

/// Ask a yes/no question.
pub fn confirm(prompt: &str, default: bool, hint: &str) -> Result<bool> {
    ensure_interactive("confirmation", hint)?;
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(answer)
}

/// Ask for a line of text. An empty answer yields `default`.
pub fn input(prompt: &str, default: &str) -> Result<String> {
    ensure_interactive("input", "Pass the value as a command-line option")?;
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if !default.is_empty() {
        input = input.default(default.to_string());
    }
    let value = input.interact_text()?;
    Ok(value.trim().to_string())
}
