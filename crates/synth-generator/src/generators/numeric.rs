//! Numeric helpers shared by the table generators.

use crate::error::GeneratorError;
use rand::Rng;
use rand_distr::{Binomial, Poisson};

/// Pick one element uniformly. `items` must not be empty.
pub fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Build a Poisson distribution with the given mean.
pub fn poisson(mean: f64) -> Result<Poisson<f64>, GeneratorError> {
    Poisson::new(mean).map_err(|e| GeneratorError::Distribution {
        name: "poisson",
        reason: e.to_string(),
    })
}

/// Build a binomial distribution over `trials` with success probability `p`.
pub fn binomial(trials: u64, p: f64) -> Result<Binomial, GeneratorError> {
    Binomial::new(trials, p).map_err(|e| GeneratorError::Distribution {
        name: "binomial",
        reason: e.to_string(),
    })
}

/// `max(1, floor(value))` as an integer count.
///
/// Negative and NaN inputs saturate to 0 in the cast and are then lifted to 1.
pub fn floor_at_least_one(value: f64) -> u32 {
    (value.floor() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Distribution;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_floor_at_least_one() {
        assert_eq!(floor_at_least_one(0.0), 1);
        assert_eq!(floor_at_least_one(0.99), 1);
        assert_eq!(floor_at_least_one(1.5), 1);
        assert_eq!(floor_at_least_one(149.999), 149);
        assert_eq!(floor_at_least_one(-3.0), 1);
    }

    #[test]
    fn test_pick_covers_all_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(pick(&mut rng, &items));
        }

        assert_eq!(seen.len(), items.len());
    }

    #[test]
    fn test_poisson_draws_are_whole_numbers() {
        let dist = poisson(100.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value: f64 = dist.sample(&mut rng);
            assert!(value >= 0.0);
            assert_eq!(value, value.floor());
        }
    }

    #[test]
    fn test_invalid_parameters_are_errors() {
        assert!(matches!(
            poisson(-1.0),
            Err(GeneratorError::Distribution {
                name: "poisson",
                ..
            })
        ));
        assert!(matches!(
            binomial(10, 1.5),
            Err(GeneratorError::Distribution {
                name: "binomial",
                ..
            })
        ));
    }

    #[test]
    fn test_binomial_with_zero_trials() {
        let dist = binomial(0, 0.05).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(dist.sample(&mut rng), 0);
    }
}
