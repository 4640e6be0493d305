//! Shared test utilities for E2E tests.
//!
//! Every fixture runs the binary against an isolated world: a temporary
//! `HOME`, a configuration file pointing at a temporary profiles root, and a
//! stub `direnv` on `PATH` that reports every `.envrc` as allowed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_profile("acme");
//!     fixture.command().arg("list").arg("--no-interactive").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// `direnv` stand-in: `status` reports the RC as allowed, everything else
/// succeeds silently.
const DIRENV_STUB: &str = r#"#!/bin/sh
case "$1" in
  status)
    echo "direnv exec path /usr/local/bin/direnv"
    echo "Found RC path $PWD/.envrc"
    echo "Found RC allowed true"
    ;;
esac
exit 0
"#;

/// Same stub, but every `.envrc` is reported as not allowed.
const DIRENV_STUB_DENIED: &str = r#"#!/bin/sh
case "$1" in
  status)
    echo "Found RC path $PWD/.envrc"
    echo "Found RC allowed false"
    ;;
esac
exit 0
"#;

/// Check whether `git` is available for tests that need it.
#[allow(dead_code)]
pub fn git_available() -> bool {
    if which::which("git").is_err() {
        eprintln!("git not installed, skipping");
        return false;
    }
    true
}

/// An isolated home directory with a profiles root and a stub `direnv`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    with_direnv: bool,
}

impl TestFixture {
    /// Create a fixture with a config file that points at `profiles/`.
    pub fn new() -> Self {
        let fixture = Self::bare();
        fixture
            .temp_dir
            .child("home/.profile-manager")
            .write_str(&format!(
                "profiles_dir={}\n",
                fixture.profiles_dir().display()
            ))
            .expect("Failed to write config file");
        fixture
            .temp_dir
            .child("profiles")
            .create_dir_all()
            .expect("Failed to create profiles dir");
        fixture
    }

    /// Create a fixture without any configuration file.
    pub fn bare() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("home")
            .create_dir_all()
            .expect("Failed to create home");
        let fixture = Self {
            temp_dir,
            with_direnv: true,
        };
        fixture.install_direnv(DIRENV_STUB);
        fixture
    }

    /// Leave `direnv` off `PATH`.
    #[allow(dead_code)]
    pub fn without_direnv(mut self) -> Self {
        self.with_direnv = false;
        self
    }

    /// Make the stub report every `.envrc` as not allowed.
    #[allow(dead_code)]
    pub fn with_direnv_denied(self) -> Self {
        self.install_direnv(DIRENV_STUB_DENIED);
        self
    }

    fn install_direnv(&self, script: &str) {
        let stub = self.temp_dir.child("bin/direnv");
        stub.write_str(script).expect("Failed to write direnv stub");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(stub.path(), std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make direnv stub executable");
        }
    }

    /// Create a profile with the CLI itself.
    #[allow(dead_code)]
    pub fn with_profile(self, name: &str) -> Self {
        self.command()
            .args(["create", name, "--no-interactive"])
            .assert()
            .success();
        self
    }

    /// Create a bare profile: a directory that only holds `.envrc`.
    #[allow(dead_code)]
    pub fn with_minimal_profile(self, name: &str, envrc: &str) -> Self {
        self.temp_dir
            .child(format!("profiles/{name}/.envrc"))
            .write_str(envrc)
            .expect("Failed to write .envrc");
        self
    }

    /// Add a file with the given path (relative to the fixture root).
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Root of the fixture.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The isolated `HOME`.
    pub fn home(&self) -> PathBuf {
        self.path().join("home")
    }

    /// The configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.home().join(".profile-manager")
    }

    /// The profiles root.
    pub fn profiles_dir(&self) -> PathBuf {
        self.path().join("profiles")
    }

    /// A profile directory.
    #[allow(dead_code)]
    pub fn profile(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(name)
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    fn search_path(&self) -> OsString {
        let inherited = env::var_os("PATH").unwrap_or_default();
        let system = env::split_paths(&inherited);
        let dirs: Vec<PathBuf> = if self.with_direnv {
            // The stub shadows any real direnv.
            std::iter::once(self.path().join("bin")).chain(system).collect()
        } else {
            system.filter(|dir| !dir.join("direnv").exists()).collect()
        };
        env::join_paths(dirs).expect("Failed to build PATH")
    }

    /// Create a command for the binary inside the isolated environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("shell-profiler");
        cmd.current_dir(self.path())
            .env("HOME", self.home())
            .env("SHELL_PROFILER_CONFIG", self.config_path())
            .env("PATH", self.search_path())
            .env("NO_COLOR", "1")
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test User")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("SHELL_PROFILER_PROFILES_DIR")
            .env_remove("WORKSPACE_PROFILE")
            .env_remove("WORKSPACE_HOME")
            .env_remove("GIT_CONFIG_GLOBAL")
            .env_remove("EDITOR")
            .env_remove("VISUAL")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

