//! RISC-V PMP Checker CLI.
//!
//! Loads a region table file, checks one access against it and prints the
//! per-region trace together with the verdict.
//!
//! # Usage
//!
//! ```text
//! pmp-checker configurations.txt 0x80001000 R
//! ```

use anyhow::Context;
use clap::Parser;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

use pmp_checker::common::AccessType;
use pmp_checker::config::{Config, ReportFormat};
use pmp_checker::core::units::pmp::{evaluate_traced, AccessRequest, OverflowPolicy};
use pmp_checker::report;
use pmp_checker::sim::loader;

/// Command-line arguments for the PMP checker.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC-V PMP access checker")]
struct Args {
    /// Region table: 64 config lines followed by 64 address lines, in hex.
    table: String,

    /// Target address in hex, e.g. 0x80001000.
    #[arg(value_parser = parse_address)]
    address: u32,

    /// Requested operation: R, W or X.
    operation: AccessType,

    /// Optional TOML settings file.
    #[arg(short, long)]
    config: Option<String>,

    /// Output format (text or json); overrides the config file.
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Limit overflow policy (error or saturate); overrides the config file.
    #[arg(long)]
    overflow: Option<OverflowPolicy>,

    /// Print only the verdict.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_address(s: &str) -> Result<u32, String> {
    loader::parse_hex(s).ok_or_else(|| format!("invalid hexadecimal address '{}'", s))
}

/// Main entry point for the PMP checker.
///
/// # Behavior
///
/// 1. **Configuration**: Parses arguments and the optional TOML file.
/// 2. **Loader**: Reads the region table; a short or malformed file is fatal.
/// 3. **Check**: Evaluates the access against the table.
/// 4. **Report**: Prints the trace and verdict to stdout.
///
/// Exits with 0 whenever a verdict is produced and 1 on any error.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let policy = args.overflow.unwrap_or(config.check.overflow);
    let format = args.format.unwrap_or(config.report.format);
    let trace = config.report.trace && !args.quiet;

    let table = loader::load_table(&args.table)?;
    let request = AccessRequest::new(args.address, args.operation);
    tracing::info!(
        table = %args.table,
        addr = request.addr,
        access = %request.access,
        ?policy,
        "checking access"
    );

    let eval = evaluate_traced(&table, request, policy).context("PMP evaluation failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &eval, format, trace).context("failed to write report")?;
    Ok(())
}
