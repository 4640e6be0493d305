//! # Backups
//!
//! Before `update` rewrites a profile it copies the files it may touch into
//! `.backups/update_<YYYY-MM-DD_HH-MM-SS>/` inside the profile. `restore`
//! copies them back.
//!
//! Backup names use local time. Two backups taken within the same second
//! are told apart by a numeric suffix, e.g. `2026-03-01_10-00-00-2`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};

/// Directory inside a profile that holds all backups.
pub const BACKUP_DIR: &str = ".backups";

/// Prefix of every backup directory name.
pub const BACKUP_PREFIX: &str = "update_";

/// Files copied into a backup, when present.
pub const BACKUP_FILES: &[&str] = &[".envrc", ".env", ".gitconfig", ".gitignore"];

/// A single dated backup of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    /// `YYYY-MM-DD_HH-MM-SS` part of the directory name.
    pub date: String,
    pub path: PathBuf,
}

impl Backup {
    /// Backed-up files present in this backup, in [`BACKUP_FILES`] order.
    pub fn files(&self) -> Vec<&'static str> {
        BACKUP_FILES
            .iter()
            .copied()
            .filter(|f| self.path.join(f).is_file())
            .collect()
    }
}

/// Copy the backed-up files of `profile_dir` into a new dated backup.
pub fn create(profile_dir: &Path) -> Result<Backup> {
    let date = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    create_at(profile_dir, &date)
}

/// Like [`create`] with a fixed timestamp. A second backup within the same
/// second gets a `-2`, `-3`, ... suffix instead of replacing the first.
fn create_at(profile_dir: &Path, stamp: &str) -> Result<Backup> {
    let root = profile_dir.join(BACKUP_DIR);
    fs::create_dir_all(&root)?;

    let mut attempt = 1u32;
    let (date, path) = loop {
        let date = if attempt == 1 {
            stamp.to_string()
        } else {
            format!("{stamp}-{attempt}")
        };
        let path = root.join(format!("{BACKUP_PREFIX}{date}"));
        match fs::create_dir(&path) {
            Ok(()) => break (date, path),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    };

    for file in BACKUP_FILES {
        let src = profile_dir.join(file);
        if src.is_file() {
            fs::copy(&src, path.join(file))?;
            log::debug!("backed up {}", src.display());
        }
    }

    Ok(Backup { date, path })
}

/// Ordering key for backup dates: timestamp, then same-second suffix.
fn sort_key(date: &str) -> (&str, u32) {
    match date.get(19..).and_then(|rest| rest.strip_prefix('-')) {
        Some(n) => (&date[..19], n.parse().unwrap_or(0)),
        None => (date, 1),
    }
}

/// All backups of `profile_dir`, newest first.
pub fn list(profile_dir: &Path) -> Result<Vec<Backup>> {
    let dir = profile_dir.join(BACKUP_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut backups = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(date) = name.strip_prefix(BACKUP_PREFIX) {
            backups.push(Backup {
                date: date.to_string(),
                path: entry.path(),
            });
        }
    }
    backups.sort_by(|a, b| sort_key(&b.date).cmp(&sort_key(&a.date)));
    Ok(backups)
}

/// The backup taken at `date`.
pub fn find(profile_dir: &Path, date: &str) -> Result<Backup> {
    let backups = list(profile_dir)?;
    if let Some(backup) = backups.iter().find(|b| b.date == date) {
        return Ok(backup.clone());
    }

    let available: Vec<_> = backups.iter().map(|b| b.date.as_str()).collect();
    Err(Error::Backup {
        message: format!(
            "no backup from {date} (available: {})",
            if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            }
        ),
    })
}

/// Files [`restore`] would copy back, optionally narrowed to one file.
pub fn restorable_files(backup: &Backup, only: Option<&str>) -> Result<Vec<&'static str>> {
    let files = backup.files();
    match only {
        None => Ok(files),
        Some(wanted) => files
            .iter()
            .copied()
            .find(|f| *f == wanted)
            .map(|f| vec![f])
            .ok_or_else(|| Error::Backup {
                message: format!("{wanted} is not in backup {}", backup.date),
            }),
    }
}

/// Copy files from `backup` back into `profile_dir` and return them.
pub fn restore(
    profile_dir: &Path,
    backup: &Backup,
    only: Option<&str>,
) -> Result<Vec<&'static str>> {
    let files = restorable_files(backup, only)?;
    for file in &files {
        fs::copy(backup.path.join(file), profile_dir.join(file))?;
        log::debug!("restored {} from {}", file, backup.date);
    }
    Ok(files)
}
