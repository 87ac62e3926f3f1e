//! Sift CLI — inspect snapshots of problem markers from the command line.
//!
//! Provides `sift show` for printing the filtered, ordered marker view and
//! `sift stats` for per-severity counts.

#![warn(missing_docs)]

mod pipeline;
mod report;
mod show;
mod stats;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use sift_config::{OutputFormat, ViewOrder};
use sift_markers::Severity;

/// Sift — group, filter and order problem markers.
#[derive(Parser, Debug)]
#[command(name = "sift", version, about = "Problem marker viewer")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `sift.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the filtered marker view.
    Show(ShowArgs),
    /// Print marker counts per severity.
    Stats(StatsArgs),
}

/// Filter flags shared by all commands; they override `sift.toml`.
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Only show markers whose message, source or code contains this text.
    #[arg(long)]
    pub text: Option<String>,

    /// Severities to hide (e.g., `--hide hint info`).
    #[arg(long, value_enum, num_args = 1..)]
    pub hide: Vec<SeverityArg>,

    /// Resource globs to restrict the view to; replaces the configured list.
    #[arg(long, num_args = 1..)]
    pub include: Vec<String>,

    /// Resource globs to hide; added to the configured list.
    #[arg(long, num_args = 1..)]
    pub exclude: Vec<String>,
}

/// Arguments for the `sift show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// JSON snapshot of markers, or `-` for stdin.
    pub snapshot: String,

    /// Marker filter flags.
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Ordering of resources and markers.
    #[arg(long, value_enum)]
    pub order: Option<ReportOrder>,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Arguments for the `sift stats` subcommand.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// JSON snapshot of markers, or `-` for stdin.
    pub snapshot: String,

    /// Marker filter flags.
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Severity selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    /// Error markers.
    Error,
    /// Warning markers.
    Warning,
    /// Info markers.
    Info,
    /// Hint markers.
    Hint,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Error => Severity::Error,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Info => Severity::Info,
            SeverityArg::Hint => Severity::Hint,
        }
    }
}

/// Ordering of the printed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportOrder {
    /// Most severe first, then by path and position.
    Sorted,
    /// Arrival order.
    Grouped,
}

impl From<ReportOrder> for ViewOrder {
    fn from(order: ReportOrder) -> Self {
        match order {
            ReportOrder::Sorted => ViewOrder::Sorted,
            ReportOrder::Grouped => ViewOrder::Grouped,
        }
    }
}

/// Output format of the printed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("error: {e}");
        process::exit(2);
    }

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Show(ref args) => show::run(args, &global),
        Command::Stats(ref args) => stats::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}

/// Installs the stderr log subscriber; `SIFT_LOG` overrides the level.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SIFT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
