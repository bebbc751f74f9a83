//! Website traffic table: one row per (date, country, source, device).

use super::numeric::{floor_at_least_one, poisson};
use super::TableGenerator;
use crate::error::GeneratorError;
use chrono::NaiveDate;
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Poisson;
use synth_core::vocab::{Country, DeviceType, TrafficSource};
use synth_core::{DateRange, TrafficRecord};

/// Mean of the per-cell session draw before the source multiplier.
pub const MEAN_SESSIONS: f64 = 100.0;

pub struct TrafficGenerator {
    dates: Vec<NaiveDate>,
    sessions: Poisson<f64>,
}

impl TrafficGenerator {
    pub fn new(range: &DateRange) -> Result<Self, GeneratorError> {
        Ok(Self {
            dates: range.dates(),
            sessions: poisson(MEAN_SESSIONS)?,
        })
    }

    /// Exact row count: |dates| x |countries| x |sources| x |devices|.
    pub fn expected_rows(&self) -> usize {
        self.dates.len() * Country::ALL.len() * TrafficSource::ALL.len() * DeviceType::ALL.len()
    }

    fn draw_cell<R: Rng>(
        &self,
        rng: &mut R,
        date: NaiveDate,
        country: Country,
        traffic_source: TrafficSource,
        device_type: DeviceType,
    ) -> TrafficRecord {
        let scaled = self.sessions.sample(rng) * traffic_source.session_multiplier();
        // Page views scale the pre-floor session value, not the floored count.
        let page_view_factor: f64 = rng.gen_range(1.2..3.0);
        let bounce_rate = rng.gen_range(0.3..0.8);
        let avg_session_duration = rng.gen_range(60.0..300.0);

        TrafficRecord {
            date,
            country,
            traffic_source,
            device_type,
            sessions: floor_at_least_one(scaled),
            page_views: floor_at_least_one(scaled * page_view_factor),
            bounce_rate,
            avg_session_duration,
        }
    }
}

impl TableGenerator for TrafficGenerator {
    type Row = TrafficRecord;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<TrafficRecord>, GeneratorError> {
        let mut rows = Vec::with_capacity(self.expected_rows());

        for &date in &self.dates {
            for country in Country::ALL {
                for source in TrafficSource::ALL {
                    for device in DeviceType::ALL {
                        rows.push(self.draw_cell(rng, date, country, source, device));
                    }
                }
            }
        }

        Ok(rows)
    }
}
