//! End-to-end tests for the `status` subcommand against a fake git shim.

mod common;
use common::prelude::*;

/// Each repository gets one labelled status line, in sorted order.
#[test]
fn test_status_one_line_per_repo_in_order() {
    let fixture = TestFixture::new().with_repos(&["zebra", "alpha"]);
    fixture.install_fake_git(scripts::ONE_MODIFIED);

    let mut cmd = cargo_bin_cmd!("githerd");
    cmd.current_dir(fixture.path())
        .env("PATH", fixture.path_env())
        .arg("status")
        .assert()
        .code(0)
        .stdout(predicate::function(|out: &str| {
            let alpha = out.find("[alpha");
            let zebra = out.find("[zebra");
            matches!((alpha, zebra), (Some(a), Some(z)) if a < z)
        }))
        .stdout(predicate::str::contains("1 modified"));
}

/// A clean repository reports `clean`.
#[test]
fn test_status_clean() {
    let fixture = TestFixture::new().with_repos(&["tidy"]);
    fixture.install_fake_git(scripts::CLEAN_STATUS);

    let mut cmd = cargo_bin_cmd!("githerd");
    cmd.current_dir(fixture.path())
        .env("PATH", fixture.path_env())
        .arg("status")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("clean"));
}

/// A failing git produces an error line for the repository but the run
/// itself still completes every target.
#[test]
fn test_status_failure_line() {
    let fixture = TestFixture::new().with_repos(&["broken", "fine"]);
    fixture.install_fake_git(scripts::ALWAYS_FAILS);

    let mut cmd = cargo_bin_cmd!("githerd");
    cmd.current_dir(fixture.path())
        .env("PATH", fixture.path_env())
        .arg("status")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: fatal: boom").count(2))
        .stderr(predicate::str::contains("2 of 2 repositories failed"));
}

/// With no repositories below the current directory, status is a friendly
/// no-op.
#[test]
fn test_status_no_repositories() {
    let fixture = TestFixture::new();

    let mut cmd = cargo_bin_cmd!("githerd");
    cmd.current_dir(fixture.path())
        .env("PATH", fixture.path_env())
        .arg("status")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No git repositories found"));
}
