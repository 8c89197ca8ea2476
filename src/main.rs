//! # githerd CLI
//!
//! This is the binary entry point for the `githerd` command-line tool.
//!
//! Its primary responsibilities are:
//! - Deciding whether to act as a transparent git wrapper (when invoked from
//!   inside a single work tree) or to fan out across many repositories.
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command and translating the run summary into
//!   a process exit code.
//!
//! The scheduling and formatting logic is defined in the `githerd` library
//! crate, ensuring that the binary is a thin wrapper around the reusable
//! library functionality.

mod cli;
mod commands;

use std::process::Command;

use anyhow::Result;
use clap::Parser;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

use githerd::discover;

/// Exec git with all original args, replacing the githerd process.
/// Used when githerd is invoked from inside a git repository, where fanning
/// out makes no sense and the user almost certainly meant plain git.
#[cfg(unix)]
fn passthrough_to_git() -> ! {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let err = Command::new("git").args(&args).exec();
    // exec() only returns on error
    eprintln!("githerd: failed to exec git: {}", err);
    std::process::exit(1);
}

/// Windows has no exec(); spawn, wait, and re-exit with the same status.
#[cfg(not(unix))]
fn passthrough_to_git() -> ! {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match Command::new("git").args(&args).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(err) => {
            eprintln!("githerd: failed to run git: {}", err);
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let first_arg = std::env::args().nth(1);
    let is_own_command = matches!(first_arg.as_deref(), Some("completions"));

    if !is_own_command && discover::is_inside_work_tree() {
        passthrough_to_git();
    }

    let cli = cli::Cli::parse();
    let code = cli.execute()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
