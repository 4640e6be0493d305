//! End-to-end tests for the `init` command.
//!
//! These tests invoke the actual CLI binary and validate how `init` writes
//! the configuration file and creates the profiles root.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_init_uses_default_profiles_dir() {
    let fixture = TestFixture::bare();

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SUCCESS: Profile manager initialized successfully",
        ))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains(
            "shell-profiler create my-profile",
        ));

    let default_root = fixture.home().join("workspaces/profiles");
    assert!(default_root.is_dir());
    let config = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert!(config.contains(&format!("profiles_dir={}", default_root.display())));
}

#[test]
fn test_init_with_explicit_profiles_dir() {
    let fixture = TestFixture::bare();
    let root = fixture.path().join("custom/root");

    fixture
        .command()
        .args(["init", "--profiles-dir"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Profiles directory: {}",
            root.display()
        )));

    assert!(root.is_dir());
    fixture
        .child("home/.profile-manager")
        .assert(predicate::str::contains(root.display().to_string()));
}

#[test]
fn test_init_expands_tilde_and_variables() {
    let fixture = TestFixture::bare();

    fixture
        .command()
        .args(["init", "--profiles-dir", "~/profiles"])
        .assert()
        .success();
    assert!(fixture.home().join("profiles").is_dir());

    fixture
        .command()
        .env("PROFILE_BASE", fixture.path().join("from-var"))
        .args(["init", "--force", "--profiles-dir", "${PROFILE_BASE}/p"])
        .assert()
        .success();
    assert!(fixture.path().join("from-var/p").is_dir());
}

#[test]
fn test_init_existing_config_needs_force_without_terminal() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["init", "--profiles-dir", "/elsewhere"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "WARNING: Configuration file already exists",
        ))
        .stderr(predicate::str::contains(
            "not running in an interactive terminal",
        ))
        .stderr(predicate::str::contains("--force"));

    // The original configuration is untouched.
    fixture
        .child("home/.profile-manager")
        .assert(predicate::str::contains(
            fixture.profiles_dir().display().to_string(),
        ));
}

#[test]
fn test_init_force_overwrites_config() {
    let fixture = TestFixture::new();
    let root = fixture.path().join("replacement");

    fixture
        .command()
        .args(["init", "--force", "--profiles-dir"])
        .arg(&root)
        .assert()
        .success();

    fixture
        .child("home/.profile-manager")
        .assert(predicate::str::contains(root.display().to_string()));
}

#[test]
fn test_init_does_not_require_direnv() {
    let fixture = TestFixture::bare().without_direnv();

    fixture.command().arg("init").assert().success();
}

#[test]
fn test_init_interactive_needs_terminal() {
    let fixture = TestFixture::bare();

    fixture
        .command()
        .args(["init", "--interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot prompt for input"));
    assert!(!fixture.config_path().exists());
}
