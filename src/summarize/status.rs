//! Status summarizer: condenses `git status --porcelain -b` output into a
//! fixed-order list of category counts (`modified`, `added`, `deleted`,
//! `renamed`, `untracked`, `ahead`, `behind`), or `clean` when nothing
//! changed.

use super::failure_line;

/// Parse the `## branch...remote [ahead N, behind M]` header line from
/// porcelain -b output. Returns (branch_name, ahead_count, behind_count).
pub fn parse_branch_line(line: &str) -> (String, usize, usize) {
    let mut ahead = 0usize;
    let mut behind = 0usize;

    let Some(content) = line.strip_prefix("## ") else {
        return (String::new(), ahead, behind);
    };

    if content.starts_with("HEAD (no branch)") {
        return ("HEAD (detached)".to_string(), ahead, behind);
    }

    if let Some(rest) = content.strip_prefix("No commits yet on ") {
        return (rest.to_string(), ahead, behind);
    }

    if let Some(rest) = content.strip_prefix("Initial commit on ") {
        return (rest.to_string(), ahead, behind);
    }

    let (branch_part, tracking_info) = if let Some(dots_pos) = content.find("...") {
        (&content[..dots_pos], &content[dots_pos + 3..])
    } else {
        (content.trim(), "")
    };

    let branch = branch_part.to_string();

    if let Some(bracket_start) = tracking_info.find('[') {
        if let Some(bracket_end) = tracking_info.find(']') {
            if bracket_start < bracket_end {
                let info = &tracking_info[bracket_start + 1..bracket_end];
                for part in info.split(',') {
                    let part = part.trim();
                    if let Some(n) = part.strip_prefix("ahead ") {
                        ahead = n.parse().unwrap_or(0);
                    } else if let Some(n) = part.strip_prefix("behind ") {
                        behind = n.parse().unwrap_or(0);
                    }
                }
            }
        }
    }

    (branch, ahead, behind)
}

pub(super) fn summarize(stdout: &str, stderr: &str, success: bool) -> String {
    if !success {
        return failure_line(stderr);
    }

    let mut ahead = 0usize;
    let mut behind = 0usize;

    let mut modified = 0;
    let mut added = 0;
    let mut deleted = 0;
    let mut renamed = 0;
    let mut untracked = 0;

    for line in stdout.lines() {
        if line.starts_with("## ") {
            let (_branch, a, b) = parse_branch_line(line);
            ahead = a;
            behind = b;
            continue;
        }

        if line.len() < 2 {
            continue;
        }

        let index_status = line.chars().next().unwrap_or(' ');
        let worktree_status = line.chars().nth(1).unwrap_or(' ');

        if index_status == '?' {
            untracked += 1;
            continue;
        }

        match index_status {
            'M' => modified += 1,
            'A' => added += 1,
            'D' => deleted += 1,
            'R' => renamed += 1,
            _ => {}
        }

        // Worktree status only counted when there is no staged change, so a
        // file that is both staged and dirty is counted exactly once
        if index_status == ' ' {
            match worktree_status {
                'M' => modified += 1,
                'D' => deleted += 1,
                _ => {}
            }
        }
    }

    let mut parts = Vec::new();

    if modified > 0 {
        parts.push(format!("{} modified", modified));
    }
    if added > 0 {
        parts.push(format!("{} added", added));
    }
    if deleted > 0 {
        parts.push(format!("{} deleted", deleted));
    }
    if renamed > 0 {
        parts.push(format!("{} renamed", renamed));
    }
    if untracked > 0 {
        parts.push(format!("{} untracked", untracked));
    }

    let has_file_changes = !parts.is_empty();

    if ahead > 0 {
        parts.push(format!("{} ahead", ahead));
    }
    if behind > 0 {
        parts.push(format!("{} behind", behind));
    }

    if parts.is_empty() {
        "clean".to_string()
    } else if !has_file_changes {
        format!("clean, {}", parts.join(", "))
    } else {
        parts.join(", ")
    }
}
