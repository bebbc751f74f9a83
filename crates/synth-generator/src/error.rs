//! Error types for the table generators.

use synth_core::{CalendarError, ConfigError, WeightError};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A distribution was built with parameters it rejects
    #[error("Invalid {name} distribution: {reason}")]
    Distribution { name: &'static str, reason: String },

    /// An id sequence ran past the end of the id space
    #[error("Id sequence exhausted at {last}")]
    SequenceExhausted { last: u64 },

    /// Weighted distribution error
    #[error("Weighted distribution error: {0}")]
    Weights(#[from] WeightError),

    /// Date range error
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
