//! Discrete distribution over a fixed list of weighted values.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Error type for weighted distribution construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WeightError {
    /// No values to choose from
    #[error("Weighted distribution needs at least one value")]
    Empty,

    /// A weight was negative, NaN or infinite
    #[error("Invalid weight {weight} at position {index}")]
    InvalidWeight { index: usize, weight: f64 },

    /// Every weight was zero
    #[error("All weights are zero")]
    AllZero,
}

/// Categorical distribution built from `(value, weight)` pairs.
///
/// Weights do not need to sum to one; they are normalised by their total.
#[derive(Debug, Clone)]
pub struct Weighted<T> {
    entries: Vec<(T, f64)>,
    index: WeightedIndex<f64>,
}

impl<T> Weighted<T> {
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self, WeightError> {
        if entries.is_empty() {
            return Err(WeightError::Empty);
        }
        if let Some((index, &(_, weight))) = entries
            .iter()
            .enumerate()
            .find(|(_, (_, w))| !w.is_finite() || *w < 0.0)
        {
            return Err(WeightError::InvalidWeight { index, weight });
        }
        if entries.iter().all(|(_, w)| *w == 0.0) {
            return Err(WeightError::AllZero);
        }

        let index = WeightedIndex::new(entries.iter().map(|(_, w)| *w))
            .map_err(|_| WeightError::AllZero)?;

        Ok(Self { entries, index })
    }

    /// Draw one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.entries[self.index.sample(rng)].0
    }

    /// The `(value, weight)` pairs as configured.
    pub fn weights(&self) -> &[(T, f64)] {
        &self.entries
    }
}
