//! # Output Summarizers
//!
//! One summarizing strategy per logical git operation, turning the raw
//! captured output of a finished subprocess into a single line of
//! human-readable text. The set of strategies is closed and known at compile
//! time, so dispatch is a plain enum rather than trait objects.
//!
//! Summarizers are pure, total functions: they terminate on any input,
//! tolerate empty and non-UTF8 bytes (via lossy conversion), and never
//! panic. Applying one twice to the same captured output yields identical
//! text.

mod fetch;
mod pull;
mod status;

pub use status::parse_branch_line;

/// Sentinel used when a failed command produced no stderr at all.
const UNKNOWN_ERROR: &str = "unknown error";

/// Summarizing strategy for one logical operation.
///
/// Chosen at command-construction time by the subcommand glue; the runner
/// only ever dispatches through [`OutputMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summarizer {
    /// Condense `status --porcelain -b` output into category counts.
    Status,
    /// Condense `pull` output into its summary line.
    Pull,
    /// Condense `fetch` output into ref-update counts.
    Fetch,
}

impl Summarizer {
    /// Map captured output and exit success to one line of text.
    pub fn summarize(&self, stdout: &[u8], stderr: &[u8], success: bool) -> String {
        let stdout = String::from_utf8_lossy(stdout);
        let stderr = String::from_utf8_lossy(stderr);

        match self {
            Summarizer::Status => status::summarize(&stdout, &stderr, success),
            Summarizer::Pull => pull::summarize(&stdout, &stderr, success),
            Summarizer::Fetch => fetch::summarize(&stdout, &stderr, success),
        }
    }
}

/// What the runner writes for one finished repository: a condensed line,
/// or the captured bytes untouched. Verbatim is a mode of its own rather
/// than a summarizer so no byte-to-string conversion exists on that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One condensed line per repository.
    Summarized(Summarizer),
    /// A label line followed by the raw captured output.
    Verbatim,
}

/// Shared failure rule: the first non-empty stderr line with an error
/// marker, or a fixed sentinel when stderr is empty.
pub(crate) fn failure_line(stderr: &str) -> String {
    let line = stderr
        .lines()
        .find(|l| !l.trim().is_empty())
        .unwrap_or(UNKNOWN_ERROR);
    format!("ERROR: {}", line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_line_first_nonempty() {
        assert_eq!(
            failure_line("\n\nfatal: not a git repository\nmore context\n"),
            "ERROR: fatal: not a git repository"
        );
    }

    #[test]
    fn test_failure_line_empty_stderr() {
        assert_eq!(failure_line(""), "ERROR: unknown error");
        assert_eq!(failure_line("   \n\t\n"), "ERROR: unknown error");
    }

    #[test]
    fn test_dispatch_failure_is_shared_across_kinds() {
        let stderr = b"fatal: not a git repository\n";
        for kind in [Summarizer::Status, Summarizer::Pull, Summarizer::Fetch] {
            assert_eq!(
                kind.summarize(b"", stderr, false),
                "ERROR: fatal: not a git repository"
            );
        }
    }

    #[test]
    fn test_summarize_tolerates_invalid_utf8() {
        let garbage = [0xff, 0xfe, 0x0a, 0x4d];
        for kind in [Summarizer::Status, Summarizer::Pull, Summarizer::Fetch] {
            // Must not panic, and must be idempotent
            let once = kind.summarize(&garbage, &garbage, true);
            let twice = kind.summarize(&garbage, &garbage, true);
            assert_eq!(once, twice);
        }
    }
}
