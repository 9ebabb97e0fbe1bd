//! `jukebox` — Runs a J, K or B transform sequence and reports its path and
//! cycle.
//!
//! **Usage:**
//! ```
//! jukebox <x0> [--base <b>] [--transform J|K|B] [--power <p>] [--max-len <n>]
//!         [--json] [--no-path] [--no-cycle] [--digits]
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Parser;
use jukebox::{Natural, Transform, TransformSequence, DEFAULT_MAX_LEN};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Iterate a positional-digit transform and report the path and cycle.
#[derive(Parser)]
#[command(
    name = "jukebox",
    about = "Iterate J, K or B digit transforms and report path and cycle"
)]
struct Args {
    /// Initial value x_0.
    x0: Natural,

    /// Base the digits are evaluated at.
    #[arg(long, default_value = "10")]
    base: Natural,

    /// Transform to iterate: J, K or B.
    #[arg(long, short, default_value = "J")]
    transform: Transform,

    /// Power for the B transform; required with `--transform B`.
    #[arg(long, short)]
    power: Option<Natural>,

    /// Maximum trace length before the run is declared persistent.
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Print JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Leave the path out of the text report.
    #[arg(long)]
    no_path: bool,

    /// Leave the cycle out of the text report.
    #[arg(long)]
    no_cycle: bool,

    /// Print the digit analysis of x_0 instead of running a sequence.
    #[arg(long)]
    digits: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    if args.digits {
        return print_digits(&args.x0, args.json);
    }

    let seq = build_sequence(&args).context("Failed to build the transform sequence")?;

    if args.json {
        let json = serde_json::to_string_pretty(&seq.summary())
            .context("Failed to serialize the sequence summary")?;
        println!("{json}");
    } else {
        println!("{}", seq.info(!args.no_path, !args.no_cycle));
    }

    Ok(())
}

fn build_sequence(args: &Args) -> jukebox::Result<TransformSequence> {
    TransformSequence::new(
        args.x0.clone(),
        args.base.clone(),
        args.power.clone(),
        args.transform,
        Natural::from(args.max_len),
    )
}

fn print_digits(x: &Natural, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "value": x.to_string(),
            "digits": x.digits(),
            "digit_count": x.digit_count(),
            "digit_sum": x.digit_sum(),
            "digital_root": x.digital_root(),
        });
        let text = serde_json::to_string_pretty(&value)
            .context("Failed to serialize the digit analysis")?;
        println!("{text}");
        return Ok(());
    }

    let digits: Vec<String> = x.digits().iter().map(ToString::to_string).collect();
    println!("Value: {x}");
    println!("Digits: [{}]", digits.join(", "));
    println!("Digit count: {}", x.digit_count());
    println!("Digit sum: {}", x.digit_sum());
    println!("Digital root: {}", x.digital_root());
    Ok(())
}
