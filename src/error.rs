//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `githerd` application. It uses the `thiserror` library to create a small
//! `Error` enum that covers the failure modes the library can actually hit.
//!
//! Note that most failures in githerd are deliberately *not* errors at this
//! level: a git command that exits non-zero, or a subprocess that fails to
//! spawn for one repository, is captured into that repository's result and
//! surfaced as its output line. Only conditions that prevent a run from
//! proceeding at all (discovery failures, a poisoned output lock, I/O errors
//! on the output stream) propagate through this type.

use thiserror::Error;

/// Main error type for githerd operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while scanning for git repositories.
    #[error("Repository discovery error: {message}")]
    Discovery { message: String },

    /// An error indicating that a mutex or other lock has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
