//! Marquee workload driver binary
//!
//! Spawns many concurrent simulated guests against a seat registry and
//! reports the final reservation count.

use anyhow::Context;
use clap::Parser;
use marquee_core::{
    AuditoriumConfig, MarqueeConfig, WorkloadConfig, SEAT_COUNT_DEFAULT,
    WORKLOAD_CONCURRENCY_COUNT_DEFAULT, WORKLOAD_GUESTS_COUNT_DEFAULT,
};
use marquee_workload::run_workload;
use tracing_subscriber::EnvFilter;

/// Marquee workload CLI
#[derive(Parser, Debug)]
#[command(name = "marquee-workload")]
#[command(about = "Concurrent seat-reservation workload driver")]
#[command(version)]
struct Cli {
    /// Number of seats in the auditorium
    #[arg(long, default_value_t = SEAT_COUNT_DEFAULT)]
    seats: u32,

    /// Number of simulated guests
    #[arg(long, default_value_t = WORKLOAD_GUESTS_COUNT_DEFAULT)]
    guests: usize,

    /// Maximum number of guest tasks running at once
    #[arg(long, default_value_t = WORKLOAD_CONCURRENCY_COUNT_DEFAULT)]
    concurrency: usize,

    /// Seed for a replayable run (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    let config = MarqueeConfig {
        auditorium: AuditoriumConfig {
            seat_count: cli.seats,
        },
        workload: WorkloadConfig {
            guest_count: cli.guests,
            concurrency_max: cli.concurrency,
            seed: cli.seed,
        },
    };

    let report = run_workload(&config)
        .await
        .context("workload run failed")?;

    tracing::info!(
        final_count = report.seats_reserved_final,
        "final reservation count"
    );

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    }

    Ok(())
}
