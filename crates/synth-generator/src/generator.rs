//! Dataset generator that runs the four table generators.

use crate::error::GeneratorError;
use crate::generators::{
    AbTestGenerator, CustomerGenerator, OrderGenerator, TableGenerator, TrafficGenerator,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::thread;
use synth_core::{
    ABTestRecord, CustomerRecord, Dataset, DatasetConfig, DateRange, OrderRecord, TableKind,
    TrafficRecord,
};
use tracing::debug;

/// Golden-ratio increment used to spread per-table seeds apart.
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed of the random stream for one table.
///
/// Each table draws from its own stream, so its content depends only on the
/// base seed and never on which other tables were generated or in what order.
pub fn stream_seed(base_seed: u64, table: TableKind) -> u64 {
    base_seed.wrapping_add(table.stream_index().wrapping_mul(STREAM_MIX))
}

/// Generates the commerce dataset for a fixed reference date.
///
/// Output is fully determined by the configuration (including its seed) and
/// the reference date.
pub struct DatasetGenerator {
    config: DatasetConfig,
    range: DateRange,
}

impl DatasetGenerator {
    /// Create a generator whose date window ends at `reference`.
    pub fn new(config: DatasetConfig, reference: NaiveDate) -> Result<Self, GeneratorError> {
        config.validate()?;
        let range = DateRange::ending_at(reference, config.history_days)?;
        Ok(Self { config, range })
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    pub fn date_range(&self) -> &DateRange {
        &self.range
    }

    fn rng_for(&self, table: TableKind) -> StdRng {
        StdRng::seed_from_u64(stream_seed(self.config.seed, table))
    }

    pub fn traffic(&self) -> Result<Vec<TrafficRecord>, GeneratorError> {
        let rows =
            TrafficGenerator::new(&self.range)?.generate(&mut self.rng_for(TableKind::Traffic))?;
        debug!("Generated {} traffic rows", rows.len());
        Ok(rows)
    }

    pub fn orders(&self) -> Result<Vec<OrderRecord>, GeneratorError> {
        let rows = OrderGenerator::new(&self.range, self.config.order_id_start)?
            .generate(&mut self.rng_for(TableKind::Orders))?;
        debug!("Generated {} order rows", rows.len());
        Ok(rows)
    }

    pub fn customers(&self) -> Result<Vec<CustomerRecord>, GeneratorError> {
        let rows = CustomerGenerator::new(
            &self.range,
            self.config.customer_count,
            self.config.customer_id_start,
        )?
        .generate(&mut self.rng_for(TableKind::Customers))?;
        debug!("Generated {} customer rows", rows.len());
        Ok(rows)
    }

    pub fn ab_tests(&self) -> Result<Vec<ABTestRecord>, GeneratorError> {
        let rows = AbTestGenerator::new(&self.range, self.config.ab_test_days as usize)?
            .generate(&mut self.rng_for(TableKind::AbTests))?;
        debug!("Generated {} A/B test rows", rows.len());
        Ok(rows)
    }

    /// Generate all four tables, one after another.
    pub fn generate(&self) -> Result<Dataset, GeneratorError> {
        self.generate_tables(&TableKind::ALL)
    }

    /// Generate only the listed tables; the others are left empty.
    pub fn generate_tables(&self, tables: &[TableKind]) -> Result<Dataset, GeneratorError> {
        let mut dataset = Dataset::default();
        for table in tables {
            match table {
                TableKind::Traffic => dataset.traffic = self.traffic()?,
                TableKind::Orders => dataset.orders = self.orders()?,
                TableKind::Customers => dataset.customers = self.customers()?,
                TableKind::AbTests => dataset.ab_tests = self.ab_tests()?,
            }
        }
        Ok(dataset)
    }

    /// Generate the listed tables, one thread per table.
    ///
    /// The result is identical to [`generate_tables`](Self::generate_tables)
    /// with the same selection.
    pub fn generate_concurrently(&self, tables: &[TableKind]) -> Result<Dataset, GeneratorError> {
        let mut tables = tables.to_vec();
        tables.sort();
        tables.dedup();

        thread::scope(|scope| {
            let handles: Vec<_> = tables
                .iter()
                .map(|&table| scope.spawn(move || self.generate_tables(&[table])))
                .collect();

            let mut dataset = Dataset::default();
            for handle in handles {
                let part = join(handle)?;
                dataset.traffic.extend(part.traffic);
                dataset.orders.extend(part.orders);
                dataset.customers.extend(part.customers);
                dataset.ab_tests.extend(part.ab_tests);
            }
            Ok(dataset)
        })
    }
}

fn join<T>(
    handle: thread::ScopedJoinHandle<'_, Result<T, GeneratorError>>,
) -> Result<T, GeneratorError> {
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}
