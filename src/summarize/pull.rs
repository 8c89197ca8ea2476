//! Pull summarizer: picks the one line of `git pull` output worth keeping,
//! preferring the diffstat summary over merge chatter.

use super::failure_line;

pub(super) fn summarize(stdout: &str, stderr: &str, success: bool) -> String {
    if !success {
        return failure_line(stderr);
    }

    if stdout.contains("Already up to date") {
        return "Already up to date".to_string();
    }

    // Diffstat summary, e.g. "3 files changed, 10 insertions(+), 5 deletions(-)"
    if let Some(summary_line) = stdout.lines().find(|l| l.contains("files changed")) {
        return summary_line.trim().to_string();
    }

    // Fast-forward or merge range, e.g. "Updating abc123..def456"
    if let Some(line) = stdout
        .lines()
        .find(|l| l.contains("..") || l.contains("Updating"))
    {
        return line.trim().to_string();
    }

    // Fallback: first non-empty line of stdout, then stderr
    stdout
        .lines()
        .chain(stderr.lines())
        .find(|l| !l.trim().is_empty())
        .unwrap_or("completed")
        .trim()
        .to_string()
}
