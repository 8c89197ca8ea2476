//! # Execution Context
//!
//! Run-wide configuration shared by every concurrent unit of work. The
//! context is constructed exactly once from the parsed command line and is
//! read-only from then on; the runner and the command modules only ever hold
//! a shared reference to it.

/// URL scheme to force for git transport, rewriting remote addresses
/// before the underlying command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlScheme {
    /// Force SSH: git@github.com:user/repo
    Ssh,
    /// Force HTTPS: https://github.com/user/repo
    Https,
}

/// Execution context holding configuration for running git commands.
///
/// `workers == 0` means unlimited: every repository's command is spawned
/// immediately.
#[derive(Debug)]
pub struct ExecutionContext {
    workers: usize,
    dry_run: bool,
    url_scheme: Option<UrlScheme>,
}

impl ExecutionContext {
    pub fn new(workers: usize, dry_run: bool, url_scheme: Option<UrlScheme>) -> Self {
        Self {
            workers,
            dry_run,
            url_scheme,
        }
    }

    /// Maximum number of concurrently running subprocesses (0 = unlimited).
    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn url_scheme(&self) -> Option<UrlScheme> {
        self.url_scheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_accessors() {
        let ctx = ExecutionContext::new(4, true, Some(UrlScheme::Ssh));
        assert_eq!(ctx.workers(), 4);
        assert!(ctx.is_dry_run());
        assert_eq!(ctx.url_scheme(), Some(UrlScheme::Ssh));
    }

    #[test]
    fn test_context_defaults_to_no_scheme() {
        let ctx = ExecutionContext::new(0, false, None);
        assert_eq!(ctx.workers(), 0);
        assert!(!ctx.is_dry_run());
        assert_eq!(ctx.url_scheme(), None);
    }
}
