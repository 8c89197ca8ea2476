//! Fetch summarizer: counts branch and tag ref updates from `git fetch`
//! output. Git writes progress to stderr and actual ref updates to stdout,
//! so an empty stdout (and no non-informational stderr) means nothing new.

use super::failure_line;

pub(super) fn summarize(stdout: &str, stderr: &str, success: bool) -> String {
    if !success {
        return failure_line(stderr);
    }

    let stdout_empty = stdout.lines().all(|l| l.trim().is_empty());
    let stderr_empty = stderr
        .lines()
        .all(|l| l.trim().is_empty() || is_remote_header(l));

    if stdout_empty && stderr_empty {
        return "no new commits".to_string();
    }

    let updates: Vec<&str> = stdout
        .lines()
        .filter(|l| l.contains("->") || l.contains("[new"))
        .collect();

    if !updates.is_empty() {
        let tag_count = updates.iter().filter(|l| l.contains("[new tag]")).count();
        let branch_count = updates.len() - tag_count;

        let mut parts = Vec::new();
        if branch_count > 0 {
            parts.push(format!(
                "{} branch{}",
                branch_count,
                if branch_count == 1 { "" } else { "es" }
            ));
        }
        if tag_count > 0 {
            parts.push(format!(
                "{} tag{}",
                tag_count,
                if tag_count == 1 { "" } else { "s" }
            ));
        }

        if !parts.is_empty() {
            return format!("{} updated", parts.join(", "));
        }
    }

    "fetched".to_string()
}

/// The `From <remote>` header git prints before ref updates. Informational,
/// not an update; the remote is a single word, so lines that merely start
/// with "From" do not qualify.
fn is_remote_header(line: &str) -> bool {
    match line.strip_prefix("From ") {
        Some(rest) => {
            let remote = rest.trim();
            !remote.is_empty() && !remote.contains(' ')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_means_no_new_commits() {
        assert_eq!(summarize("", "", true), "no new commits");
    }

    #[test]
    fn test_from_lines_are_informational() {
        assert_eq!(
            summarize("", "From github.com:user/repo\n", true),
            "no new commits"
        );
        assert_eq!(
            summarize("", "From https://github.com/user/repo\n", true),
            "no new commits"
        );
    }

    #[test]
    fn test_prose_starting_with_from_is_not_swallowed() {
        // A hook echoing arbitrary text must not be mistaken for the
        // remote header
        assert_eq!(
            summarize("", "From here on this hook is chatty\n", true),
            "fetched"
        );
        assert_eq!(summarize("", "Fromage\n", true), "fetched");
    }

    #[test]
    fn test_single_branch_update() {
        assert_eq!(
            summarize("   abc123..def456  main  -> origin/main\n", "", true),
            "1 branch updated"
        );
    }

    #[test]
    fn test_multiple_branches() {
        let stdout = "   abc..def  main -> origin/main\n   123..456  dev -> origin/dev\n";
        assert_eq!(summarize(stdout, "", true), "2 branches updated");
    }

    #[test]
    fn test_new_branch_marker() {
        assert_eq!(
            summarize(" * [new branch]  feature -> origin/feature\n", "", true),
            "1 branch updated"
        );
    }

    #[test]
    fn test_branches_and_tags() {
        let stdout = "   abc..def  main -> origin/main\n * [new tag]  v1.0.0 -> v1.0.0\n * [new tag]  v1.0.1 -> v1.0.1\n";
        assert_eq!(summarize(stdout, "", true), "1 branch, 2 tags updated");
    }

    #[test]
    fn test_single_tag_only() {
        assert_eq!(
            summarize(" * [new tag]  v2.0.0 -> v2.0.0\n", "", true),
            "1 tag updated"
        );
    }

    #[test]
    fn test_output_without_markers_falls_back() {
        assert_eq!(summarize("something unexpected\n", "", true), "fetched");
    }

    #[test]
    fn test_failure_uses_shared_rule() {
        assert_eq!(
            summarize("", "fatal: unable to access remote\n", false),
            "ERROR: fatal: unable to access remote"
        );
    }
}
