//! Status command implementation
//!
//! Runs `git status --porcelain -b` in every repository and condenses each
//! result to category counts. `--no-optional-locks` keeps the parallel
//! status probes from taking index locks and tripping over concurrent git
//! activity in the same repositories.

use std::io::Write;
use std::sync::Mutex;

use anyhow::Result;

use githerd::command::GitCommand;
use githerd::context::ExecutionContext;
use githerd::discover::Target;
use githerd::runner::{run_parallel, RunSummary};
use githerd::summarize::{OutputMode, Summarizer};

pub fn run<W: Write>(
    ctx: &ExecutionContext,
    targets: &[Target],
    extra_args: &[String],
    out: &Mutex<W>,
) -> Result<RunSummary> {
    let summary = run_parallel(
        ctx,
        targets,
        |target| {
            let mut args = vec![
                "--no-optional-locks".to_string(),
                "status".to_string(),
                "--porcelain".to_string(),
                "-b".to_string(),
            ];
            args.extend(extra_args.iter().cloned());
            GitCommand::build(target.path(), &args, ctx.url_scheme())
        },
        OutputMode::Summarized(Summarizer::Status),
        out,
    )?;

    Ok(summary)
}
