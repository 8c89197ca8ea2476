//! # Command Construction
//!
//! Builds the exact git invocation for one repository. There is a single
//! assembly path for the argument vector: the dry-run display string and the
//! spawned subprocess are both projections of the same stored [`GitCommand`]
//! value, so what is printed in dry-run mode can never drift from what would
//! actually execute.
//!
//! Argument order is fixed: the optional transport-rewrite `-c` pair comes
//! first, then `-C <path>` to scope the command to the repository (the
//! process working directory is never changed, so concurrent commands cannot
//! interfere with one another), then the operation name and any user-supplied
//! trailing arguments, unmodified and unreordered.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::context::UrlScheme;

/// insteadOf rewrite forcing SSH remotes.
const SSH_REWRITE: &str = "url.git@github.com:.insteadOf=https://github.com/";
/// insteadOf rewrite forcing HTTPS remotes.
const HTTPS_REWRITE: &str = "url.https://github.com/.insteadOf=git@github.com:";

/// A git command ready to be executed against a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    program: String,
    argv: Vec<String>,
}

impl GitCommand {
    /// Assemble the argument vector for one repository.
    ///
    /// This is the only place the vector is put together; both
    /// [`display_string`](Self::display_string) and [`spawn`](Self::spawn)
    /// read it back unchanged.
    pub fn build(repo_path: &Path, args: &[String], url_scheme: Option<UrlScheme>) -> Self {
        let mut argv = Vec::with_capacity(args.len() + 4);

        if let Some(scheme) = url_scheme {
            argv.push("-c".to_string());
            argv.push(
                match scheme {
                    UrlScheme::Ssh => SSH_REWRITE,
                    UrlScheme::Https => HTTPS_REWRITE,
                }
                .to_string(),
            );
        }

        argv.push("-C".to_string());
        argv.push(repo_path.display().to_string());
        argv.extend(args.iter().cloned());

        Self {
            program: "git".to_string(),
            argv,
        }
    }

    /// Build a command running an arbitrary program, for exercising the
    /// runner without a git binary.
    #[cfg(test)]
    pub(crate) fn custom(program: &str, argv: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            argv,
        }
    }

    /// The full argument vector, excluding the program name.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The command string for display, used by dry-run mode and error
    /// messages. A formatting of the same vector that `spawn` executes.
    pub fn display_string(&self) -> String {
        format!("{} {}", self.program, self.argv.join(" "))
    }

    /// Spawn the command without waiting for completion.
    ///
    /// Both output pipes are captured; stdin is closed and interactive
    /// credential prompts are disabled so a repository that would ask for
    /// a password fails fast instead of hanging the run.
    pub fn spawn(&self) -> std::io::Result<Child> {
        Command::new(&self.program)
            .args(&self.argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env("GIT_TERMINAL_PROMPT", "0")
            .spawn()
    }
}
