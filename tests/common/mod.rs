//! Shared test utilities for E2E tests.
//!
//! This module provides a fixture that builds a directory of fake git
//! repositories plus a fake `git` executable on PATH, so end-to-end tests
//! exercise the real binary without touching the network or real
//! repositories.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_repos(&["alpha", "beta"]);
//!     fixture.install_fake_git(scripts::CLEAN_STATUS);
//!     // ... test code
//! }
//! ```

use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::scripts;
    pub use super::TestFixture;
}

/// Fake `git` script bodies for common scenarios. Each script answers every
/// git invocation the same way, which is enough because the binary only
/// inspects captured output. None of them ever prints `true`, so the
/// inside-work-tree probe always answers "no".
#[allow(dead_code)]
pub mod scripts {
    /// A clean repository on main.
    pub const CLEAN_STATUS: &str = "echo '## main'\n";

    /// One staged-and-dirty file on main.
    pub const ONE_MODIFIED: &str = "echo '## main'\necho 'MM file.txt'\n";

    /// Pull reporting nothing to do.
    pub const UP_TO_DATE: &str = "echo 'Already up to date.'\n";

    /// Fetch updating a single branch.
    pub const ONE_BRANCH_FETCHED: &str = "echo '   abc123..def456  main  -> origin/main'\n";

    /// A git that always fails.
    pub const ALWAYS_FAILS: &str = "echo 'fatal: boom' >&2\nexit 1\n";

    /// Verbatim multi-line output for passthrough commands.
    pub const TWO_LINES: &str = "echo 'first line'\necho 'second line'\n";
}

/// A temp directory of fake repositories with an optional fake git on PATH.
pub struct TestFixture {
    pub temp: assert_fs::TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp: assert_fs::TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Create fake repositories (directories containing a `.git` marker).
    pub fn with_repos(self, names: &[&str]) -> Self {
        for name in names {
            fs::create_dir_all(self.temp.path().join(name).join(".git")).unwrap();
        }
        self
    }

    /// Install a fake `git` shell script under `_bin` inside the fixture.
    ///
    /// The `_bin` directory has no `.git` marker, so discovery never picks
    /// it up as a repository.
    pub fn install_fake_git(&self, body: &str) {
        let bin_dir = self.temp.path().join("_bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let git = bin_dir.join("git");
        fs::write(&git, format!("#!/bin/sh\n{}", body)).unwrap();
        let mut perms = fs::metadata(&git).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&git, perms).unwrap();
    }

    /// PATH value with the fake git directory prepended.
    pub fn path_env(&self) -> OsString {
        let bin_dir = self.temp.path().join("_bin");
        let mut value = OsString::from(bin_dir);
        if let Some(existing) = env::var_os("PATH") {
            value.push(":");
            value.push(existing);
        }
        value
    }
}
