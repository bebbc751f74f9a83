//! A/B test table: one row per (date, variant) over the trailing window.

use super::numeric::{binomial, poisson};
use super::TableGenerator;
use crate::error::GeneratorError;
use chrono::NaiveDate;
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Poisson;
use synth_core::vocab::Variant;
use synth_core::{round_currency, ABTestRecord, DateRange, AB_TEST_NAME};

/// Mean sessions per variant per day.
pub const MEAN_SESSIONS: f64 = 200.0;

/// `conversions / sessions`, or 0 for an arm without sessions.
pub fn observed_rate(conversions: u64, sessions: u64) -> f64 {
    if sessions > 0 {
        conversions as f64 / sessions as f64
    } else {
        0.0
    }
}

pub struct AbTestGenerator {
    dates: Vec<NaiveDate>,
    sessions: Poisson<f64>,
}

impl AbTestGenerator {
    /// Cover the last `days` dates of `range`.
    pub fn new(range: &DateRange, days: usize) -> Result<Self, GeneratorError> {
        Ok(Self {
            dates: range.trailing(days),
            sessions: poisson(MEAN_SESSIONS)?,
        })
    }

    fn draw_arm<R: Rng>(
        &self,
        rng: &mut R,
        date: NaiveDate,
        variant: Variant,
    ) -> Result<ABTestRecord, GeneratorError> {
        let sessions = self.sessions.sample(rng) as u64;
        let conversions = binomial(sessions, variant.conversion_probability())?.sample(rng);
        let conversion_rate = observed_rate(conversions, sessions);
        let revenue = round_currency(conversions as f64 * rng.gen_range(80.0..150.0));

        Ok(ABTestRecord {
            date,
            test_name: AB_TEST_NAME,
            variant,
            sessions,
            conversions,
            conversion_rate,
            revenue,
        })
    }
}

impl TableGenerator for AbTestGenerator {
    type Row = ABTestRecord;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<ABTestRecord>, GeneratorError> {
        let mut rows = Vec::with_capacity(self.dates.len() * Variant::ALL.len());

        for &date in &self.dates {
            for variant in Variant::ALL {
                rows.push(self.draw_arm(rng, date, variant)?);
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn range() -> DateRange {
        DateRange::ending_at(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(), 180).unwrap()
    }

    #[test]
    fn test_observed_rate() {
        assert_eq!(observed_rate(0, 0), 0.0);
        assert_eq!(observed_rate(0, 200), 0.0);
        assert_eq!(observed_rate(13, 200), 0.065);
        assert_eq!(observed_rate(7, 7), 1.0);
    }

    #[test]
    fn test_one_row_per_date_and_variant() {
        let generator = AbTestGenerator::new(&range(), 30).unwrap();
        let rows = generator.generate(&mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(rows.len(), 60);
        let trailing = range().trailing(30);
        for (pair, date) in rows.chunks(2).zip(&trailing) {
            assert_eq!(pair[0].date, *date);
            assert_eq!(pair[0].variant, Variant::A);
            assert_eq!(pair[1].date, *date);
            assert_eq!(pair[1].variant, Variant::B);
        }
    }

    #[test]
    fn test_conversion_invariants() {
        let generator = AbTestGenerator::new(&range(), 30).unwrap();
        let rows = generator.generate(&mut StdRng::seed_from_u64(42)).unwrap();

        for row in &rows {
            assert_eq!(row.test_name, "Product_Page_Redesign");
            assert!(row.conversions <= row.sessions);
            if row.sessions > 0 {
                assert_eq!(
                    row.conversion_rate,
                    row.conversions as f64 / row.sessions as f64
                );
            } else {
                assert_eq!(row.conversion_rate, 0.0);
            }
            assert!(row.revenue >= 0.0);
            assert!(row.revenue <= row.conversions as f64 * 150.0);
        }
    }

    #[test]
    fn test_dates_restricted_to_trailing_window() {
        let generator = AbTestGenerator::new(&range(), 30).unwrap();
        let rows = generator.generate(&mut StdRng::seed_from_u64(1)).unwrap();
        let first_allowed = range().trailing(30)[0];

        assert!(rows.iter().all(|r| r.date >= first_allowed));
        assert!(rows.iter().all(|r| r.date <= range().end()));
    }

    #[test]
    fn test_variant_b_converts_better_across_seeds() {
        let generator = AbTestGenerator::new(&range(), 30).unwrap();
        let (mut a, mut b) = ((0u64, 0u64), (0u64, 0u64));

        for seed in 0..50 {
            for row in generator.generate(&mut StdRng::seed_from_u64(seed)).unwrap() {
                let arm = match row.variant {
                    Variant::A => &mut a,
                    Variant::B => &mut b,
                };
                arm.0 += row.conversions;
                arm.1 += row.sessions;
            }
        }

        let rate_a = a.0 as f64 / a.1 as f64;
        let rate_b = b.0 as f64 / b.1 as f64;
        assert!(rate_b > rate_a, "A {rate_a} vs B {rate_b}");
        assert!((rate_a - 0.05).abs() < 0.005);
        assert!((rate_b - 0.065).abs() < 0.005);
    }
}
