//! `mars-robots` — runs a script of robots against one Martian world.
//!
//! **Usage:**
//! ```text
//! mars-robots [--input <path>] [--format text|json] [--keep-going]
//! ```
//!
//! Reads from stdin when no input file is given. Exits non-zero if the session
//! was aborted by a failing robot.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mars_robots::{ErrorPolicy, RobotResult, SessionReport, run_script};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Drive robots across Mars and report where they end up.
#[derive(Parser)]
#[command(name = "mars-robots", about = "Simulate robots exploring a grid on Mars")]
struct Args {
    /// Script to read (default: stdin).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Report failing robots and keep going instead of aborting.
    #[arg(long)]
    keep_going: bool,
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let script = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let policy = if args.keep_going {
        ErrorPolicy::SkipRobot
    } else {
        ErrorPolicy::Abort
    };

    let report = run_script(&script, policy)?;
    info!(robots = report.robots.len(), aborted = report.aborted, "session finished");

    match args.format {
        Format::Text => print_text(&report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.aborted {
        process::exit(1);
    }
    Ok(())
}

/// Builds the log filter from `RUST_LOG`, falling back to `warn` when it is unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn print_text(report: &SessionReport) {
    for robot in &report.robots {
        match &robot.result {
            RobotResult::Outcome(outcome) => println!("{outcome}"),
            RobotResult::Error(message) => println!("error: {message}, line {}", robot.line),
        }
    }
}
