//! Core types for the commerce-synth dataset generator.
//!
//! This crate holds everything the table generators share:
//!
//! - [`DateRange`] - the daily window every generated date falls in
//! - [`vocab`] - countries, product categories, traffic sources, devices and
//!   the pricing rules attached to them
//! - [`Weighted`] - categorical distribution over `(value, weight)` pairs
//! - record types for the four tables and the [`TableRow`] contract used to
//!   persist them
//! - [`DatasetConfig`] - generation parameters loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── synth-generator     (draws records using the vocabularies)
//!    │
//!    └─── synth-populate-csv  (writes records through TableRow)
//! ```

pub mod calendar;
pub mod config;
pub mod records;
pub mod table;
pub mod vocab;
pub mod weighted;

// Re-exports for convenience
pub use calendar::{CalendarError, DateRange};
pub use config::{ConfigError, DatasetConfig};
pub use records::{
    round_currency, ABTestRecord, CustomerRecord, Dataset, OrderRecord, TrafficRecord,
    AB_TEST_NAME,
};
pub use table::{TableKind, TableRow, UnknownTable};
pub use weighted::{WeightError, Weighted};
