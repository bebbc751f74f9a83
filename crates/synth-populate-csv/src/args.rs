//! CLI argument definitions for dataset generation.

use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use synth_core::TableKind;

/// Arguments that select what to generate.
#[derive(Args, Clone, Debug)]
pub struct CommonGenerateArgs {
    /// Path to a YAML file with generation parameters
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data);
    /// overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Last date of the generated window (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Specific tables to generate (comma-separated, empty = all tables)
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<TableKind>,

    /// Generate the tables on separate threads
    #[arg(long)]
    pub concurrent: bool,

    /// Dry-run mode: generate and report row counts without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonGenerateArgs {
    /// Tables selected on the command line, or all of them.
    pub fn selected_tables(&self) -> Vec<TableKind> {
        if self.tables.is_empty() {
            TableKind::ALL.to_vec()
        } else {
            let mut tables = self.tables.clone();
            tables.sort();
            tables.dedup();
            tables
        }
    }
}

/// CSV-specific generate arguments.
#[derive(Args, Clone, Debug)]
pub struct CSVPopulateArgs {
    /// Output directory for CSV files (one file per table)
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of rows of each table to print after generation
    #[arg(long, default_value = "5")]
    pub preview: usize,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}
