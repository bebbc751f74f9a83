//! Table generators.
//!
//! Each generator owns its immutable parameters (dates, distributions,
//! weights) and draws every random value from the RNG passed to
//! [`TableGenerator::generate`], so a seeded RNG fully determines the output.

pub mod ab_test;
pub mod customers;
pub mod numeric;
pub mod orders;
pub mod sequence;
pub mod traffic;

use crate::error::GeneratorError;
use rand::Rng;

pub use ab_test::AbTestGenerator;
pub use customers::CustomerGenerator;
pub use orders::OrderGenerator;
pub use sequence::IdSequence;
pub use traffic::TrafficGenerator;

/// Trait for generating one table.
pub trait TableGenerator {
    /// Record type of the generated table.
    type Row;

    /// Generate every row of the table using the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<Self::Row>, GeneratorError>;
}
