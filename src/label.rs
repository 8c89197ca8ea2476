//! # Repository Labels
//!
//! Fixed-width rendering of repository names for the per-repository output
//! lines. Every line starts with a `[name]` label padded (or truncated with
//! an ellipsis) to a constant width so the formatted messages line up into a
//! scannable column.

/// Width of the name field inside the brackets.
pub const MAX_REPO_NAME_WIDTH: usize = 24;

/// Format a repository name with fixed width: truncate long names, pad short ones.
pub fn repo_label(name: &str) -> String {
    let display_name = if name.chars().count() > MAX_REPO_NAME_WIDTH {
        let head: String = name.chars().take(MAX_REPO_NAME_WIDTH - 4).collect();
        format!("{}-...", head)
    } else {
        name.to_string()
    };
    format!("[{:<width$}]", display_name, width = MAX_REPO_NAME_WIDTH)
}
