//! Orders table: a Poisson number of independent purchases per day.

use super::numeric::{pick, poisson};
use super::sequence::IdSequence;
use super::TableGenerator;
use crate::error::GeneratorError;
use chrono::NaiveDate;
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Poisson;
use synth_core::vocab::{Country, CustomerType, PaymentMethod, ProductCategory};
use synth_core::{round_currency, DateRange, OrderRecord, Weighted};

/// Mean number of orders per day.
pub const MEAN_DAILY_ORDERS: f64 = 50.0;

pub struct OrderGenerator {
    dates: Vec<NaiveDate>,
    first_order_id: u64,
    daily_orders: Poisson<f64>,
    quantity: Weighted<u8>,
    customer_type: Weighted<CustomerType>,
    payment_method: Weighted<PaymentMethod>,
}

impl OrderGenerator {
    pub fn new(range: &DateRange, first_order_id: u64) -> Result<Self, GeneratorError> {
        Ok(Self {
            dates: range.dates(),
            first_order_id,
            daily_orders: poisson(MEAN_DAILY_ORDERS)?,
            quantity: Weighted::new(vec![(1, 0.7), (2, 0.25), (3, 0.05)])?,
            customer_type: Weighted::new(vec![
                (CustomerType::New, 0.6),
                (CustomerType::Returning, 0.4),
            ])?,
            payment_method: Weighted::new(vec![
                (PaymentMethod::CreditCard, 0.6),
                (PaymentMethod::PayPal, 0.3),
                (PaymentMethod::BankTransfer, 0.1),
            ])?,
        })
    }

    /// Generate all orders, drawing ids from `ids` and handing the advanced
    /// sequence back.
    ///
    /// Ids follow emission order: date-major, then order within the day.
    pub fn generate_from<R: Rng>(
        &self,
        rng: &mut R,
        mut ids: IdSequence,
    ) -> Result<(Vec<OrderRecord>, IdSequence), GeneratorError> {
        let mut rows = Vec::with_capacity(self.dates.len() * MEAN_DAILY_ORDERS as usize);

        for &date in &self.dates {
            let daily_orders = self.daily_orders.sample(rng) as u64;
            for _ in 0..daily_orders {
                rows.push(self.draw_order(rng, date, &mut ids)?);
            }
        }

        Ok((rows, ids))
    }

    fn draw_order<R: Rng>(
        &self,
        rng: &mut R,
        date: NaiveDate,
        ids: &mut IdSequence,
    ) -> Result<OrderRecord, GeneratorError> {
        let country = pick(rng, &Country::ALL);
        let product_category = pick(rng, &ProductCategory::ALL);

        let (low, high) = product_category.price_range();
        let base_price = rng.gen_range(low..high);
        let order_value = round_currency(base_price * country.price_multiplier());

        let quantity = *self.quantity.sample(rng);
        let customer_type = *self.customer_type.sample(rng);
        let payment_method = *self.payment_method.sample(rng);
        let shipping_cost = round_currency(rng.gen_range(5.0..25.0));
        let delivery_days = rng.gen_range(3..=14);

        Ok(OrderRecord {
            order_id: ids.next_id()?,
            date,
            country,
            product_category,
            order_value,
            quantity,
            customer_type,
            payment_method,
            shipping_cost,
            delivery_days,
        })
    }
}

impl TableGenerator for OrderGenerator {
    type Row = OrderRecord;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<OrderRecord>, GeneratorError> {
        let (rows, _) = self.generate_from(rng, IdSequence::starting_at(self.first_order_id))?;
        Ok(rows)
    }
}
