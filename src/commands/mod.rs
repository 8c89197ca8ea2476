//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `githerd` command-line tool. Each subcommand is defined in its own file
//! to keep the logic separated and maintainable.
//!
//! The git-facing subcommands are thin glue: they pick the summarizing
//! strategy for the operation, assemble the per-repository argument list,
//! and hand both to the runner. All scheduling and output ordering lives in
//! the `githerd` library.

pub mod completions;
pub mod fetch;
pub mod passthrough;
pub mod pull;
pub mod status;
