//! Error types for the CSV populator.

use thiserror::Error;

/// Errors that can occur while writing tables to CSV.
#[derive(Error, Debug)]
pub enum CSVPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
