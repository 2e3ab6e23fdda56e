//! Animates a search in the terminal.
//!
//! ```text
//! cargo run -p sift-playback --example animate -- --algorithm jump --target 70
//! RUST_LOG=debug cargo run -p sift-playback --example animate -- -a binary -t 50 --seed 7
//! ```

use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use sift_core::Markers;
use sift_playback::{
    Config, Controller, StepOutcome,
    play::{self, ThreadPacer},
};
use sift_search::{AlgorithmKind, random_values};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Animate a search algorithm step by step")]
struct Cli {
    /// Algorithm to run (linear, binary, jump, interpolation, exponential, fibonacci)
    #[arg(short, long, default_value = "binary")]
    algorithm: AlgorithmKind,

    /// Value to search for
    #[arg(short, long, allow_negative_numbers = true)]
    target: i64,

    /// Comma-separated input values; defaults to the algorithm's sample
    #[arg(short, long, value_delimiter = ',', conflicts_with = "seed")]
    values: Option<Vec<i64>>,

    /// Generate random input from this seed instead
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds between steps; defaults to the algorithm's cadence
    #[arg(short, long)]
    cadence_ms: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let kind = cli.algorithm;

    let values = match (cli.values, cli.seed) {
        (Some(values), _) => values,
        (None, Some(seed)) => random_values(kind, &mut StdRng::seed_from_u64(seed)),
        (None, None) => kind.sample_values().to_vec(),
    };
    if kind.requires_sorted() && !values.is_sorted() {
        bail!("{kind} requires sorted input");
    }

    let cadence = cli
        .cadence_ms
        .map_or(kind.cadence(), Duration::from_millis);
    let mut controller = Controller::new(Config::new(cadence)?);

    println!(
        "{kind}: time {}, space {}",
        kind.time_complexity(),
        kind.space_complexity()
    );
    println!("{}", render_values(&values));

    let trace = kind.generate_trace(&values, cli.target);
    let summary = play::play(
        &mut controller,
        trace,
        ThreadPacer,
        |outcome: &StepOutcome| {
            if outcome.advanced() {
                println!("{}", render_step(&values, outcome));
            }
            None
        },
    )?;

    println!(
        "{} after {} comparisons ({} jumps) in {:.1}s",
        summary.status,
        summary.comparisons,
        summary.jumps,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}

fn render_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| format!("{value:>4}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_step(values: &[i64], outcome: &StepOutcome) -> String {
    let cells: Vec<_> = (0..values.len())
        .map(|index| format!("{:>4}", labels(outcome.markers, index)))
        .collect();
    let verdict = if outcome.matched() { "  <- match" } else { "" };
    format!("{}{verdict}", cells.join(" "))
}

fn labels(markers: Markers, index: usize) -> String {
    markers
        .at(index)
        .map(|marker| marker.name().chars().next().unwrap_or('?'))
        .collect()
}
