//! # Parallel Runner
//!
//! Executes one git subprocess per repository with bounded concurrency and
//! streams the formatted results in repository order.
//!
//! ## Scheduling
//!
//! The runner keeps a sliding window of at most `workers` subprocesses in
//! flight: it spawns the first `min(workers, n)` immediately and replaces
//! each one as it completes, driven by an explicit state machine
//! (`next_to_spawn`, `active`, `completed`, `next_to_release`) rather than a
//! thread pool's implicit fairness. A worker limit of 0 means every
//! subprocess is spawned at once.
//!
//! ## Ordering
//!
//! Completion order is unconstrained, but output order is always the input
//! order of the target list. Release is head-of-line: the moment the result
//! for the next unreleased index arrives it is printed, then any already
//! buffered successors, so the latency to the first line is bounded by the
//! first repository alone and a slow straggler never hides results that
//! precede it.
//!
//! The output stream is the only shared mutable state; it is guarded by the
//! mutex handed in by the caller. Everything else (argv, captured buffers,
//! results) is owned by the unit of work that produced it and handed off.

use std::io::Write;
use std::sync::{mpsc, Mutex};
use std::thread;

use log::debug;

use crate::command::GitCommand;
use crate::context::ExecutionContext;
use crate::discover::Target;
use crate::error::{Error, Result};
use crate::label::repo_label;
use crate::summarize::OutputMode;

/// Outcome of one repository's command. Produced exactly once per target;
/// the target's index in the input list is the sole ordering key downstream.
#[derive(Debug)]
pub enum ExecutionResult {
    /// Dry-run mode: the display string of the command that would have run.
    DryRun(String),
    /// The subprocess ran to completion (successfully or not).
    Executed {
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        success: bool,
    },
    /// The subprocess could not be started at all.
    SpawnError(String),
}

impl ExecutionResult {
    fn is_failure(&self) -> bool {
        match self {
            ExecutionResult::DryRun(_) => false,
            ExecutionResult::Executed { success, .. } => !*success,
            ExecutionResult::SpawnError(_) => true,
        }
    }
}

/// Aggregate outcome of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Run one command per repository with bounded concurrency, writing one
/// formatted line (or verbatim block) per repository to `out` in input
/// order.
///
/// A repository whose command exits non-zero, or whose subprocess cannot be
/// spawned, is reported on its own line and counted in the summary; it never
/// aborts the remaining repositories.
pub fn run_parallel<W, F>(
    ctx: &ExecutionContext,
    targets: &[Target],
    build_command: F,
    mode: OutputMode,
    out: &Mutex<W>,
) -> Result<RunSummary>
where
    W: Write,
    F: Fn(&Target) -> GitCommand,
{
    let total = targets.len();
    if total == 0 {
        return Ok(RunSummary { total: 0, failed: 0 });
    }

    // Dry-run shares the release path so the invariant of one result and
    // one line per target holds in both modes. The displayed string is a
    // projection of the identical command value execution would spawn.
    if ctx.is_dry_run() {
        for target in targets {
            let result = ExecutionResult::DryRun(build_command(target).display_string());
            release(target, &result, mode, out)?;
        }
        return Ok(RunSummary { total, failed: 0 });
    }

    let limit = match ctx.workers() {
        0 => total,
        n => n.min(total),
    };

    let (tx, rx) = mpsc::channel::<(usize, ExecutionResult)>();
    let mut pending: Vec<Option<ExecutionResult>> = (0..total).map(|_| None).collect();

    // Sliding window state
    let mut next_to_spawn = 0usize;
    let mut active = 0usize;
    let mut completed = 0usize;
    let mut next_to_release = 0usize;
    let mut failed = 0usize;

    thread::scope(|scope| -> Result<()> {
        let spawn_next = |next_to_spawn: &mut usize, active: &mut usize| {
            let idx = *next_to_spawn;
            let cmd = build_command(&targets[idx]);
            debug!("[{}] spawning: {}", targets[idx].name(), cmd.display_string());
            let tx = tx.clone();
            scope.spawn(move || {
                let result = execute(&cmd);
                // The receiver lives until every worker has reported
                let _ = tx.send((idx, result));
            });
            *next_to_spawn += 1;
            *active += 1;
        };

        while next_to_spawn < total && active < limit {
            spawn_next(&mut next_to_spawn, &mut active);
        }

        while completed < total {
            let Ok((idx, result)) = rx.recv() else {
                break;
            };
            active -= 1;
            completed += 1;
            pending[idx] = Some(result);

            // A slot freed up: keep the window full
            if next_to_spawn < total {
                spawn_next(&mut next_to_spawn, &mut active);
            }

            // Head-of-line release of every contiguous buffered result
            while next_to_release < total {
                match pending[next_to_release].take() {
                    Some(result) => {
                        if result.is_failure() {
                            failed += 1;
                        }
                        release(&targets[next_to_release], &result, mode, out)?;
                        next_to_release += 1;
                    }
                    None => break,
                }
            }
        }

        Ok(())
    })?;

    Ok(RunSummary { total, failed })
}

/// Run one subprocess to completion, capturing both output pipes.
///
/// `wait_with_output` drains stdout and stderr concurrently with the child,
/// so a repository producing more than a pipe buffer of output cannot
/// deadlock the run.
fn execute(cmd: &GitCommand) -> ExecutionResult {
    match cmd.spawn().and_then(|child| child.wait_with_output()) {
        Ok(output) => ExecutionResult::Executed {
            stdout: output.stdout,
            stderr: output.stderr,
            success: output.status.success(),
        },
        Err(err) => ExecutionResult::SpawnError(err.to_string()),
    }
}

/// Write the line (or verbatim block) for one finished repository.
fn release<W: Write>(
    target: &Target,
    result: &ExecutionResult,
    mode: OutputMode,
    out: &Mutex<W>,
) -> Result<()> {
    let mut out = out.lock().map_err(|_| Error::LockPoisoned {
        context: "output stream".to_string(),
    })?;

    match result {
        ExecutionResult::DryRun(display) => writeln!(out, "{}", display)?,
        ExecutionResult::SpawnError(message) => {
            writeln!(out, "{} ERROR: {}", repo_label(target.name()), message)?;
        }
        ExecutionResult::Executed {
            stdout,
            stderr,
            success,
        } => match mode {
            OutputMode::Verbatim => {
                // Label on its own line; the captured bytes are not altered
                writeln!(out, "{}", repo_label(target.name()))?;
                out.write_all(stdout)?;
                out.write_all(stderr)?;
            }
            OutputMode::Summarized(summarizer) => {
                let line = summarizer.summarize(stdout, stderr, *success);
                writeln!(out, "{} {}", repo_label(target.name()), line)?;
            }
        },
    }

    Ok(())
}
