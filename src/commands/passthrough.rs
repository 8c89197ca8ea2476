//! Passthrough command implementation
//!
//! Any subcommand githerd does not recognize is run as-is in every
//! repository. Output is not condensed: each repository prints a label line
//! followed by its captured output verbatim.

use std::io::Write;
use std::sync::Mutex;

use anyhow::Result;

use githerd::command::GitCommand;
use githerd::context::ExecutionContext;
use githerd::discover::Target;
use githerd::runner::{run_parallel, RunSummary};
use githerd::summarize::OutputMode;

pub fn run<W: Write>(
    ctx: &ExecutionContext,
    targets: &[Target],
    args: &[String],
    out: &Mutex<W>,
) -> Result<RunSummary> {
    if args.is_empty() {
        anyhow::bail!("No git command specified");
    }

    let summary = run_parallel(
        ctx,
        targets,
        |target| GitCommand::build(target.path(), args, ctx.url_scheme()),
        OutputMode::Verbatim,
        out,
    )?;

    Ok(summary)
}
