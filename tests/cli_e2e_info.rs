//! End-to-end tests for the `info` command.
//!
//! An active profile is simulated by exporting the variables its `.envrc`
//! would set.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_info_without_active_profile() {
    let fixture = TestFixture::new()
        .with_profile("acme")
        .with_profile("personal");

    fixture
        .command()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workspace profile active"))
        .stdout(predicate::str::contains("Available profiles:"))
        .stdout(predicate::str::contains("  - acme"))
        .stdout(predicate::str::contains("  - personal"));
}

#[test]
fn test_info_active_profile() {
    let fixture = TestFixture::new().with_profile("acme");
    let home = fixture.profile("acme");
    // The stub direnv stays reachable ahead of the profile bin directory.
    let path = std::env::join_paths([
        fixture.path().join("bin"),
        home.join("bin"),
        "/usr/bin".into(),
        "/bin".into(),
    ])
    .unwrap();

    fixture
        .command()
        .env("WORKSPACE_PROFILE", "acme")
        .env("WORKSPACE_HOME", &home)
        .env("WORKSPACE_EXTRA", "1")
        .env("GIT_CONFIG_GLOBAL", home.join(".gitconfig"))
        .env("PATH", &path)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Current Workspace Profile ==="))
        .stdout(predicate::str::contains("Profile Name:    acme"))
        .stdout(predicate::str::contains(format!(
            "Profile Home:    {}",
            home.display()
        )))
        .stdout(predicate::str::contains(format!(
            "Config File:   {}",
            home.join(".gitconfig").display()
        )))
        .stdout(predicate::str::contains("WORKSPACE_EXTRA=1"))
        .stdout(predicate::str::contains("PATH additions:"))
        .stdout(predicate::str::contains(
            home.join("bin").display().to_string(),
        ));
}

#[test]
fn test_info_missing_git_config() {
    let fixture = TestFixture::new().with_profile("acme");

    fixture
        .command()
        .env("WORKSPACE_PROFILE", "acme")
        .env("WORKSPACE_HOME", fixture.profile("acme"))
        .env("GIT_CONFIG_GLOBAL", fixture.path().join("missing.gitconfig"))
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Config file not found"));
}
