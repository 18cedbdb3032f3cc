mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use verdant_core::types::PlantRecord;

#[derive(Parser)]
#[command(name = "verdant", version, about = "Plant watering-health inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every plant in a garden snapshot file
    Status(StatusArgs),
    /// Simulate a watering timeline and print the status transitions
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct StatusArgs {
    /// Garden snapshot: JSON array of plant records
    #[arg(long)]
    garden: PathBuf,
    /// Evaluation instant (RFC 3339); defaults to the current time
    #[arg(long)]
    now: Option<DateTime<Utc>>,
    /// Emit raw evaluations as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SimulateArgs {
    /// Expected watering interval in days
    #[arg(long)]
    frequency: i64,
    /// Days between the previous watering and the simulated one
    #[arg(long)]
    previous_interval: Option<f64>,
    /// Days to simulate
    #[arg(long, default_value_t = 21)]
    days: u32,
    /// Hours between samples
    #[arg(long, default_value_t = 12)]
    step_hours: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Commands::Status(args) => status(args),
        Commands::Simulate(args) => simulate(args),
    }
}

fn status(args: StatusArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.garden)
        .with_context(|| format!("reading {}", args.garden.display()))?;
    let plants: Vec<PlantRecord> = serde_json::from_str(&raw).context("parsing garden snapshot")?;
    let now = args.now.unwrap_or_else(Utc::now);
    tracing::debug!(plants = plants.len(), %now, "evaluating garden snapshot");

    if args.json {
        let rows: Vec<serde_json::Value> = plants
            .iter()
            .map(|plant| {
                let evaluation = plant.history(now).map(|h| verdant_core::evaluate(&h));
                serde_json::json!({
                    "id": plant.id,
                    "name": plant.name,
                    "evaluation": evaluation,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        report::print_table(&plants, now);
    }
    Ok(())
}

fn simulate(args: SimulateArgs) -> anyhow::Result<()> {
    report::print_timeline(
        args.frequency,
        args.previous_interval,
        args.days,
        args.step_hours,
    );
    Ok(())
}
