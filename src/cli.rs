//! CLI argument parsing and command dispatch

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};

use githerd::context::{ExecutionContext, UrlScheme};
use githerd::discover;
use githerd::output::{failure_notice, OutputConfig};

use crate::commands;

/// githerd - parallel git across many repositories
#[derive(Parser, Debug)]
#[command(name = "githerd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of parallel workers (0 = unlimited)
    #[arg(short = 'n', long, global = true, value_name = "N", default_value_t = 8)]
    workers: usize,

    /// Print exact commands without executing them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Force SSH URLs (git@github.com:) for all remotes
    #[arg(long, global = true, conflicts_with = "https")]
    ssh: bool,

    /// Force HTTPS URLs (https://github.com/) for all remotes
    #[arg(long, global = true, conflicts_with = "ssh")]
    https: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a one-line status summary for every repository
    Status {
        /// Additional arguments passed to git status
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Pull every repository
    Pull {
        /// Additional arguments passed to git pull
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Fetch every repository
    Fetch {
        /// Additional arguments passed to git fetch
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
    /// Pass any other git command through to every repository
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code.
    pub fn execute(self) -> Result<i32> {
        self.init_logging();

        let output = OutputConfig::from_env_and_flag(&self.color);

        // Completions need no repositories
        if let Some(Commands::Completions(args)) = &self.command {
            commands::completions::execute(args)?;
            return Ok(0);
        }

        if self.command.is_none() {
            println!("No command specified. Use --help for usage information.");
            return Ok(0);
        }

        let cwd = std::env::current_dir()?;
        let targets = discover::find_targets(&cwd)?;
        if targets.is_empty() {
            println!("No git repositories found in {}", cwd.display());
            return Ok(0);
        }

        let url_scheme = if self.ssh {
            Some(UrlScheme::Ssh)
        } else if self.https {
            Some(UrlScheme::Https)
        } else {
            None
        };

        let ctx = ExecutionContext::new(self.workers, self.dry_run, url_scheme);

        if ctx.is_dry_run() {
            println!(
                "[githerd v{}] dry-run mode, no git commands will be executed. Planned commands below.",
                env!("CARGO_PKG_VERSION")
            );
        }

        // The sole serialization point for per-repository output
        let out = Mutex::new(io::stdout());

        let summary = match self.command {
            Some(Commands::Status { args }) => commands::status::run(&ctx, &targets, &args, &out)?,
            Some(Commands::Pull { args }) => commands::pull::run(&ctx, &targets, &args, &out)?,
            Some(Commands::Fetch { args }) => commands::fetch::run(&ctx, &targets, &args, &out)?,
            Some(Commands::External(args)) => {
                commands::passthrough::run(&ctx, &targets, &args, &out)?
            }
            Some(Commands::Completions(_)) | None => unreachable!(), // handled above
        };

        if let Ok(mut handle) = out.lock() {
            handle.flush().ok();
        }

        // Exit-code policy: any failed repository fails the whole invocation
        if summary.failed > 0 {
            eprintln!("{}", failure_notice(&output, summary.failed, summary.total));
            return Ok(1);
        }

        Ok(0)
    }

    fn init_logging(&self) {
        let level = self
            .log_level
            .parse()
            .unwrap_or(log::LevelFilter::Warn);
        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .ok();
    }
}
