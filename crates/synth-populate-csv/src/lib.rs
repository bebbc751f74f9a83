//! CSV writer for commerce-synth tables.
//!
//! This crate persists the tables produced by the synth-generator crate,
//! one comma-separated file per table with a header row.
//!
//! # Example
//!
//! ```ignore
//! use synth_populate_csv::CSVPopulator;
//! use synth_core::TableKind;
//!
//! let dataset = generator.generate()?;
//! let outputs = CSVPopulator::new().populate_dataset(&dataset, "out", &TableKind::ALL)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{CSVPopulateArgs, CommonGenerateArgs};
pub use error::CSVPopulatorError;
pub use populator::{CSVPopulator, PopulateMetrics, TableOutput, DEFAULT_BUFFER_SIZE};
