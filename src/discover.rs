//! # Repository Discovery
//!
//! Scans the invocation directory for git working copies. Discovery is
//! intentionally shallow: only immediate subdirectories containing a `.git`
//! marker (directory, or file for linked worktrees) are considered. The
//! returned list is sorted by path and that order is the canonical output
//! order for the whole run.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// One git working copy under management by a single invocation.
///
/// Immutable once discovered; the path is used for command scoping and the
/// name (the directory basename) for the output label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    path: PathBuf,
    name: String,
}

impl Target {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Find all git repositories directly under `root`.
///
/// Returns a path-sorted list; an unreadable root is a discovery error,
/// while unreadable entries below it are skipped with a debug log.
pub fn find_targets(root: &Path) -> Result<Vec<Target>> {
    if !root.is_dir() {
        return Err(Error::Discovery {
            message: format!("not a directory: {}", root.display()),
        });
    }

    let mut targets = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() && path.join(".git").exists() {
            targets.push(Target::new(path.to_path_buf()));
        }
    }

    targets.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(targets)
}

/// Check whether the current directory is itself inside a git work tree.
///
/// Used to decide whether to hand the whole invocation over to plain git
/// instead of fanning out. Any failure to run git is treated as "no".
pub fn is_inside_work_tree() -> bool {
    let output = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(out) => {
            out.status.success() && String::from_utf8_lossy(&out.stdout).trim() == "true"
        }
        Err(_) => false,
    }
}
