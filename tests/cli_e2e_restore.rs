//! End-to-end tests for the `restore` command.
//!
//! Backups are written by hand into `.backups/update_<date>/` so the tests
//! control their dates.

#[allow(dead_code)]
mod common;
use common::prelude::*;

fn fixture_with_backups() -> TestFixture {
    TestFixture::new()
        .with_minimal_profile("acme", "current envrc\n")
        .with_file("profiles/acme/.gitconfig", "current gitconfig\n")
        .with_file(
            "profiles/acme/.backups/update_2026-01-01_10-00-00/.envrc",
            "old envrc\n",
        )
        .with_file(
            "profiles/acme/.backups/update_2026-03-01_10-00-00/.envrc",
            "newer envrc\n",
        )
        .with_file(
            "profiles/acme/.backups/update_2026-03-01_10-00-00/.gitconfig",
            "newer gitconfig\n",
        )
}

#[test]
fn test_restore_newest_backup_without_terminal() {
    let fixture = fixture_with_backups();

    fixture
        .command()
        .args(["restore", "acme", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SUCCESS: Restored 2 file(s) from backup 2026-03-01_10-00-00",
        ))
        .stdout(predicate::str::contains("✓ .envrc"))
        .stdout(predicate::str::contains("✓ .gitconfig"));

    fixture
        .child("profiles/acme/.envrc")
        .assert("newer envrc\n");
    fixture
        .child("profiles/acme/.gitconfig")
        .assert("newer gitconfig\n");
}

#[test]
fn test_restore_specific_date_and_file() {
    let fixture = fixture_with_backups();

    fixture
        .command()
        .args([
            "restore",
            "acme",
            "--force",
            "--backup-date",
            "2026-01-01_10-00-00",
            "--file",
            ".envrc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 file(s)"));

    fixture.child("profiles/acme/.envrc").assert("old envrc\n");
    fixture
        .child("profiles/acme/.gitconfig")
        .assert("current gitconfig\n");
}

#[test]
fn test_restore_dry_run() {
    let fixture = fixture_with_backups();

    fixture
        .command()
        .args(["restore", "acme", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN - Nothing will be restored"))
        .stdout(predicate::str::contains("Would restore:"));

    fixture
        .child("profiles/acme/.envrc")
        .assert("current envrc\n");
}

#[test]
fn test_restore_unknown_date_lists_available() {
    let fixture = fixture_with_backups();

    fixture
        .command()
        .args(["restore", "acme", "--force", "--backup-date", "1999-01-01_00-00-00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2026-03-01_10-00-00"));
}

#[test]
fn test_restore_file_missing_from_backup() {
    let fixture = fixture_with_backups();

    fixture
        .command()
        .args([
            "restore",
            "acme",
            "--force",
            "--backup-date",
            "2026-01-01_10-00-00",
            "--file",
            ".gitconfig",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".gitconfig"));
}

#[test]
fn test_restore_without_backups() {
    let fixture = TestFixture::new().with_profile("acme");

    fixture
        .command()
        .args(["restore", "acme", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no backups found for profile 'acme'",
        ));
}

#[test]
fn test_restore_without_force_needs_terminal() {
    let fixture = fixture_with_backups();

    fixture
        .command()
        .args(["restore", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "not running in an interactive terminal",
        ));

    fixture
        .child("profiles/acme/.envrc")
        .assert("current envrc\n");
}

#[test]
fn test_update_then_restore() {
    let fixture = TestFixture::new().with_profile("acme");
    let original = std::fs::read_to_string(fixture.profile("acme").join(".envrc")).unwrap();

    fixture
        .command()
        .args(["update", "acme"])
        .assert()
        .success();
    fixture
        .child("profiles/acme/.envrc")
        .write_str("edited\n")
        .unwrap();

    fixture
        .command()
        .args(["restore", "acme", "--force", "--file", ".envrc"])
        .assert()
        .success();
    fixture.child("profiles/acme/.envrc").assert(original);
}
