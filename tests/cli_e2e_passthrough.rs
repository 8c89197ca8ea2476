//! End-to-end tests for passthrough of arbitrary git subcommands.

mod common;
use common::prelude::*;

/// An unrecognized subcommand fans out to every repository and prints each
/// repository's output verbatim under a label line.
#[test]
fn test_passthrough_verbatim_output() {
    let fixture = TestFixture::new().with_repos(&["myrepo"]);
    fixture.install_fake_git(scripts::TWO_LINES);

    let mut cmd = cargo_bin_cmd!("githerd");
    cmd.current_dir(fixture.path())
        .env("PATH", fixture.path_env())
        .args(["log", "--oneline"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[myrepo"))
        .stdout(predicate::str::contains("first line\nsecond line\n"));
}

/// Passthrough preserves the order of repositories even with many targets.
#[test]
fn test_passthrough_ordering() {
    let fixture = TestFixture::new().with_repos(&["a1", "a2", "a3", "a4"]);
    fixture.install_fake_git(scripts::TWO_LINES);

    let mut cmd = cargo_bin_cmd!("githerd");
    cmd.current_dir(fixture.path())
        .env("PATH", fixture.path_env())
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::function(|out: &str| {
            let positions: Vec<_> = ["[a1", "[a2", "[a3", "[a4"]
                .iter()
                .map(|label| out.find(label))
                .collect();
            positions.iter().all(|p| p.is_some())
                && positions.windows(2).all(|w| w[0] < w[1])
        }));
}
