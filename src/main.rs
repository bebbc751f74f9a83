//! Command-line interface for commerce-synth
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # All four tables, default seed, window ending today
//! commerce-synth generate --output-dir data
//!
//! # Reproducible run from a config file, tables built on separate threads
//! commerce-synth generate -o data -c dataset.yaml --as-of 2024-06-30 --concurrent
//!
//! # Report row counts only
//! commerce-synth generate --dry-run --tables traffic
//! ```
//!
//! ## Inspect
//! ```bash
//! commerce-synth inspect data/orders.csv --preview 10
//! commerce-synth inspect data/customers.csv --filter-column gender --filter-value F
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use clap::{Parser, Subcommand};
use commerce_synth::{run_generate, run_inspect, InspectArgs};
use synth_populate_csv::CSVPopulateArgs;

#[derive(Parser)]
#[command(name = "commerce-synth")]
#[command(about = "Generate and inspect a synthetic commerce dataset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the dataset and write one CSV file per table
    Generate {
        #[command(flatten)]
        args: CSVPopulateArgs,
    },

    /// Summarize a generated CSV table
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args),
        Commands::Inspect { args } => run_inspect(&args),
    }
}
