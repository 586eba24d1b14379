use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fisco_core::{CalculationRequest, TaxCalculator, validate};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Italian tax and social-contribution estimator.
///
/// Reads a calculation request from a JSON file, validates it, runs the
/// full calculation (VAT, IRPEF or substitute tax, territorial surtaxes,
/// IRAP, INPS/INAIL or professional-fund contributions, payment deadlines)
/// and prints the result as JSON.
#[derive(Debug, Parser)]
struct Cli {
    /// Path of the JSON calculation request.
    request: PathBuf,

    /// Reference date for age, activity years and deadline generation.
    /// Defaults to today.
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Pretty-print the result JSON.
    #[arg(long)]
    pretty: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.request)
        .with_context(|| format!("reading request file {}", cli.request.display()))?;
    let request: CalculationRequest =
        serde_json::from_str(&raw).context("parsing calculation request")?;

    let errors = validate(&request);
    if !errors.is_empty() {
        bail!("invalid request:\n  - {}", errors.join("\n  - "));
    }

    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    debug!(%as_of, "running calculation");

    let result = TaxCalculator::new(as_of).calculate(&request)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
