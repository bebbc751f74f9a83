//! Seeded table generators for the commerce-synth dataset.
//!
//! This crate provides the [`DatasetGenerator`], which produces the four
//! tables of a synthetic commerce dataset: website traffic, orders, customers
//! and A/B test results. Every table is drawn from its own seeded `StdRng`
//! stream, so the output is reproducible for a given seed and reference date
//! regardless of the order (or concurrency) in which tables are produced.
//!
//! # Architecture
//!
//! ```text
//! DatasetConfig + reference date
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   DatasetGenerator   │
//! │                      │
//! │  - DateRange         │
//! │  - seed per table    │
//! └──────────┬───────────┘
//!            │
//!   ┌────────┼─────────┬──────────┐
//!   ▼        ▼         ▼          ▼
//! Traffic  Orders  Customers   AbTest
//!            │
//!            ▼
//!         Dataset { traffic, orders, customers, ab_tests }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use synth_core::DatasetConfig;
//! use synth_generator::DatasetGenerator;
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
//! let generator = DatasetGenerator::new(DatasetConfig::default(), reference).unwrap();
//!
//! let customers = generator.customers().unwrap();
//! assert_eq!(customers.len(), 2000);
//! assert_eq!(customers[0].customer_id, 1000);
//! ```
//!
//! # Generators
//!
//! - [`TrafficGenerator`] - Poisson sessions per (date, country, source, device)
//! - [`OrderGenerator`] - Poisson daily order counts with category/country pricing
//! - [`CustomerGenerator`] - fixed-size cohort of independent profiles
//! - [`AbTestGenerator`] - two-arm experiment with binomial conversions

pub mod error;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use error::GeneratorError;
pub use generator::{stream_seed, DatasetGenerator};
pub use generators::{
    AbTestGenerator, CustomerGenerator, IdSequence, OrderGenerator, TableGenerator,
    TrafficGenerator,
};
