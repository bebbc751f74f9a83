//! Customers table: a fixed-size cohort of independent profiles.
//!
//! Profiles are not linked to the orders or traffic tables.

use super::numeric::{pick, poisson};
use super::sequence::IdSequence;
use super::TableGenerator;
use crate::error::GeneratorError;
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Poisson;
use synth_core::vocab::{AgeGroup, Country, Gender, TrafficSource};
use synth_core::{round_currency, CustomerRecord, DateRange, Weighted};

/// Mean of the Poisson draw added to the one guaranteed order.
pub const MEAN_EXTRA_ORDERS: f64 = 3.0;

pub struct CustomerGenerator {
    range: DateRange,
    count: u64,
    first_customer_id: u64,
    gender: Weighted<Gender>,
    email_subscribed: Weighted<bool>,
    extra_orders: Poisson<f64>,
}

impl CustomerGenerator {
    pub fn new(
        range: &DateRange,
        count: u64,
        first_customer_id: u64,
    ) -> Result<Self, GeneratorError> {
        Ok(Self {
            range: *range,
            count,
            first_customer_id,
            gender: Weighted::new(vec![
                (Gender::Male, 0.45),
                (Gender::Female, 0.5),
                (Gender::Other, 0.05),
            ])?,
            email_subscribed: Weighted::new(vec![(true, 0.7), (false, 0.3)])?,
            extra_orders: poisson(MEAN_EXTRA_ORDERS)?,
        })
    }

    fn draw_customer<R: Rng>(&self, rng: &mut R, customer_id: u64) -> CustomerRecord {
        // Offsets cover [0, span): the reference date itself is never drawn.
        let offset = rng.gen_range(0..self.range.span_days());

        CustomerRecord {
            customer_id,
            registration_date: self.range.day(offset),
            country: pick(rng, &Country::ALL),
            age_group: pick(rng, &AgeGroup::ALL),
            gender: *self.gender.sample(rng),
            acquisition_channel: pick(rng, &TrafficSource::ALL),
            email_subscribed: *self.email_subscribed.sample(rng),
            total_orders: self.extra_orders.sample(rng) as u32 + 1,
            lifetime_value: round_currency(rng.gen_range(50.0..800.0)),
        }
    }
}

impl TableGenerator for CustomerGenerator {
    type Row = CustomerRecord;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<CustomerRecord>, GeneratorError> {
        let mut ids = IdSequence::starting_at(self.first_customer_id);
        let mut rows = Vec::with_capacity(self.count as usize);
        for _ in 0..self.count {
            let customer_id = ids.next_id()?;
            rows.push(self.draw_customer(rng, customer_id));
        }

        Ok(rows)
    }
}
