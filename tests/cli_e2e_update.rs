//! End-to-end tests for the `update` command.
//!
//! Legacy profiles are written by hand: an `.envrc` that still exports the
//! tool variables, no `.env`, and no new layout directories.

#[allow(dead_code)]
mod common;
use common::prelude::*;

const LEGACY_ENVRC: &str = r#"#!/usr/bin/env bash
export WORKSPACE_PROFILE="legacy"
export WORKSPACE_HOME="$(pwd)"

# Git configuration
export GIT_CONFIG_GLOBAL="$WORKSPACE_HOME/.gitconfig"

PATH_add bin
"#;

fn legacy_fixture() -> TestFixture {
    TestFixture::new()
        .with_minimal_profile("legacy", LEGACY_ENVRC)
        .with_file("profiles/legacy/.gitconfig", "[user]\n    name = Old\n")
}

#[test]
fn test_update_migrates_legacy_profile() {
    let fixture = legacy_fixture();

    fixture
        .command()
        .args(["update", "legacy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO: Updating profile: legacy"))
        .stdout(predicate::str::contains("Backup created:"))
        .stdout(predicate::str::contains("SUCCESS: Profile updated successfully"))
        .stdout(predicate::str::contains(
            "Updated .envrc (moved tool-specific vars to .env)",
        ))
        .stdout(predicate::str::contains(
            "Updated .env with tool-specific environment variables",
        ));

    let envrc = fixture.child("profiles/legacy/.envrc");
    envrc.assert(predicate::str::contains("export GIT_CONFIG_GLOBAL").not());
    envrc.assert(predicate::str::contains("dotenv_if_exists .env"));
    fixture
        .child("profiles/legacy/.env")
        .assert(predicate::str::contains("GIT_CONFIG_GLOBAL="));
    fixture
        .child("profiles/legacy/.kube")
        .assert(predicate::path::is_dir());

    // The backup holds the pre-update files.
    let backups = fixture.profile("legacy").join(".backups");
    let backup = std::fs::read_dir(&backups)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    assert!(backup
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("update_"));
    assert_eq!(
        std::fs::read_to_string(backup.join(".envrc")).unwrap(),
        LEGACY_ENVRC
    );
}

#[test]
fn test_update_is_idempotent() {
    let fixture = legacy_fixture();

    fixture
        .command()
        .args(["update", "legacy", "--no-backup"])
        .assert()
        .success();
    fixture
        .command()
        .args(["update", "legacy", "--no-backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile is already up to date"));
}

#[test]
fn test_update_fresh_profile_is_up_to_date() {
    let fixture = TestFixture::new().with_profile("acme");

    fixture
        .command()
        .args(["update", "acme", "--no-backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile is already up to date"));
}

#[test]
fn test_update_dry_run_changes_nothing() {
    let fixture = legacy_fixture();

    fixture
        .command()
        .args(["update", "legacy", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN - No changes were made"))
        .stdout(predicate::str::contains("Would update:"))
        .stdout(predicate::str::contains("Created directories:"));

    fixture
        .child("profiles/legacy/.envrc")
        .assert(LEGACY_ENVRC);
    fixture
        .child("profiles/legacy/.env")
        .assert(predicate::path::missing());
    fixture
        .child("profiles/legacy/.backups")
        .assert(predicate::path::missing());
}

#[test]
fn test_update_no_backup_skips_backup() {
    let fixture = legacy_fixture();

    fixture
        .command()
        .args(["update", "legacy", "--no-backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created").not());
    fixture
        .child("profiles/legacy/.backups")
        .assert(predicate::path::missing());
}

#[test]
fn test_update_unknown_profile_suggests_similar() {
    let fixture = legacy_fixture();

    fixture
        .command()
        .args(["update", "legaci"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile 'legaci' does not exist"))
        .stderr(predicate::str::contains("Did you mean 'legacy'?"));
}

#[test]
fn test_update_without_name_needs_terminal() {
    let fixture = legacy_fixture();

    fixture
        .command()
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot prompt for a profile: not running in an interactive terminal",
        ));
}

#[test]
fn test_update_rejects_path_outside_profiles_root() {
    let fixture = legacy_fixture().with_file("outside/.envrc", "export OLD=1\n");

    fixture
        .command()
        .args(["update", "../outside", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid profile name '../outside'"));

    fixture
        .child("outside/.envrc")
        .assert("export OLD=1\n");
    fixture
        .child("outside/.backups")
        .assert(predicate::path::missing());
}
