//! Fetch command implementation

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
            let mut args = vec!["fetch".to_string()];
            args.extend(extra_args.iter().cloned());
            GitCommand::build(target.path(), &args, ctx.url_scheme())
        },
        OutputMode::Summarized(Summarizer::Fetch),
        out,
    )?;

    Ok(summary)
}
