//! Exploratory checks on a persisted table.
//!
//! Reads a CSV file with a header row and reports its shape, the inferred
//! type of each column, per-column null counts, a row preview, and the rows
//! matching an equality filter.

use crate::render::render_rows;
use chrono::NaiveDate;
use clap::Args;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Error type for table inspection.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filter on a column the table does not have
    #[error("Column '{0}' not found")]
    UnknownColumn(String),
}

/// Type inferred from the non-empty cells of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    Date,
    Text,
}

impl ColumnType {
    fn of_cell(cell: &str) -> ColumnType {
        if cell.parse::<i64>().is_ok() {
            ColumnType::Integer
        } else if cell.parse::<f64>().is_ok() {
            ColumnType::Float
        } else if matches!(cell, "True" | "False" | "true" | "false") {
            ColumnType::Boolean
        } else if NaiveDate::parse_from_str(cell, "%Y-%m-%d").is_ok() {
            ColumnType::Date
        } else {
            ColumnType::Text
        }
    }

    fn widen(self, other: ColumnType) -> ColumnType {
        match (self, other) {
            (a, b) if a == b => a,
            (ColumnType::Integer, ColumnType::Float) | (ColumnType::Float, ColumnType::Integer) => {
                ColumnType::Float
            }
            _ => ColumnType::Text,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::Text => "text",
        })
    }
}

/// Non-empty value of `column` in `row`; short rows read as empty.
fn cell(row: &[String], column: usize) -> Option<&str> {
    row.get(column).map(String::as_str).filter(|c| !c.is_empty())
}

/// In-memory copy of a CSV table.
#[derive(Debug, Clone)]
pub struct TableProfile {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableProfile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InspectError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InspectError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;
        Ok(Self { headers, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.headers
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    /// Inferred type of every column; columns without values are text.
    pub fn column_types(&self) -> Vec<(String, ColumnType)> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let inferred = self
                    .rows
                    .iter()
                    .filter_map(|row| cell(row, i))
                    .map(ColumnType::of_cell)
                    .reduce(ColumnType::widen)
                    .unwrap_or(ColumnType::Text);
                (name.clone(), inferred)
            })
            .collect()
    }

    /// Number of empty (or missing) cells per column.
    pub fn null_counts(&self) -> Vec<(String, usize)> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let nulls = self
                    .rows
                    .iter()
                    .filter(|row| cell(row, i).is_none())
                    .count();
                (name.clone(), nulls)
            })
            .collect()
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Rows whose `column` equals `value` exactly.
    pub fn filter_eq(&self, column: &str, value: &str) -> Result<Vec<Vec<String>>, InspectError> {
        let index = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| InspectError::UnknownColumn(column.to_string()))?;

        Ok(self
            .rows
            .iter()
            .filter(|row| row.get(index).map(String::as_str) == Some(value))
            .cloned()
            .collect())
    }

    /// Human-readable report: shape, types, null counts and a preview.
    pub fn report(&self, preview: usize) -> String {
        let (rows, columns) = self.shape();
        let mut out = format!("Shape: ({rows}, {columns})\n\nColumn types:\n");
        for (name, column_type) in self.column_types() {
            out.push_str(&format!("  {name:<24} {column_type}\n"));
        }
        out.push_str("\nNull counts:\n");
        for (name, nulls) in self.null_counts() {
            out.push_str(&format!("  {name:<24} {nulls}\n"));
        }
        out.push_str(&format!("\nPreview (first {preview} rows):\n"));
        out.push_str(&render_rows(&self.headers, self.head(preview)));
        out
    }
}

/// Arguments of the inspect command.
#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    /// CSV file to inspect
    #[arg(default_value = "orders.csv")]
    pub file: PathBuf,

    /// Number of rows to preview
    #[arg(long, default_value = "5")]
    pub preview: usize,

    /// Column used by the equality filter
    #[arg(long, default_value = "country")]
    pub filter_column: String,

    /// Value the filter column must equal
    #[arg(long, default_value = "US")]
    pub filter_value: String,

    /// Skip the filter section
    #[arg(long)]
    pub no_filter: bool,
}

/// Run the inspect command.
pub fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    use anyhow::Context;

    let profile = TableProfile::from_path(&args.file)
        .with_context(|| format!("Failed to read table from {:?}", args.file))?;
    tracing::info!("Loaded {} rows from {}", profile.shape().0, args.file.display());

    println!("{}", profile.report(args.preview));

    if !args.no_filter {
        let matches = profile.filter_eq(&args.filter_column, &args.filter_value)?;
        println!(
            "Rows where {} = {} ({} rows):",
            args.filter_column,
            args.filter_value,
            matches.len()
        );
        print!("{}", render_rows(profile.columns(), &matches));
    }

    Ok(())
}
