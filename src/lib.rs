//! # githerd Library
//!
//! This library provides the core functionality for running a git command
//! concurrently across many working copies and condensing each repository's
//! output into one deterministic line. It is designed to be used by the
//! `githerd` command-line tool but can also be embedded by other tools that
//! manage groups of repositories.
//!
//! ## Quick Example
//!
//! ```
//! use githerd::command::GitCommand;
//! use githerd::context::UrlScheme;
//! use std::path::Path;
//!
//! // One construction path: the dry-run display string and the executed
//! // argv are projections of the same value.
//! let cmd = GitCommand::build(
//!     Path::new("/work/repo"),
//!     &["fetch".to_string()],
//!     Some(UrlScheme::Ssh),
//! );
//! assert!(cmd.display_string().starts_with("git -c "));
//! assert!(cmd.argv().contains(&"fetch".to_string()));
//! ```
//!
//! ## Core Concepts
//!
//! - **Discovery (`discover`)**: Finds git working copies directly under the
//!   invocation directory. Their sorted order is the canonical output order
//!   for the whole run.
//! - **Commands (`command`)**: Assembles the exact git invocation for one
//!   repository, including transport rewrites and directory scoping, with a
//!   single construction path shared by dry-run display and real execution.
//! - **Runner (`runner`)**: A sliding-window scheduler that keeps a bounded
//!   number of subprocesses in flight and releases results head-of-line, so
//!   output is streamed yet always in repository order.
//! - **Summarizers (`summarize`)**: Pure functions condensing captured
//!   subprocess output into one line per repository, one strategy per
//!   logical operation.
//! - **Context (`context`)**: Run-wide, read-only configuration shared by
//!   every concurrent unit of work.

pub mod command;
pub mod context;
pub mod discover;
pub mod error;
pub mod label;
pub mod output;
pub mod runner;
pub mod summarize;
