//! commerce-synth library
//!
//! Command handlers behind the `commerce-synth` binary.
//!
//! # Features
//!
//! - Generation: a seeded, reproducible commerce dataset (website traffic,
//!   orders, customers, A/B test results) written as CSV files
//! - Inspection: shape, inferred column types, null counts, a preview and an
//!   equality filter over any generated table
//!
//! # Crates
//!
//! - `synth_core` - vocabularies, record types, configuration
//! - `synth_generator` - the seeded table generators
//! - `synth_populate_csv` - CSV persistence
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate every table into ./data for a fixed reference date
//! commerce-synth generate --output-dir data --as-of 2024-06-30
//!
//! # Regenerate only orders and customers with another seed
//! commerce-synth generate -o data --seed 7 --tables orders,customers
//!
//! # Inspect the orders table, filtered to US rows
//! commerce-synth inspect data/orders.csv --filter-column country --filter-value US
//! ```

pub mod generate;
pub mod inspect;
pub mod render;

pub use generate::run_generate;
pub use inspect::{run_inspect, ColumnType, InspectArgs, InspectError, TableProfile};
