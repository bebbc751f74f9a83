//! Row types for the four generated tables.
//!
//! Records are plain values: they are built once by a generator and never
//! mutated afterwards. Field order in each struct matches the column order of
//! the persisted table.

use crate::table::{TableKind, TableRow};
use crate::vocab::{
    AgeGroup, Country, CustomerType, DeviceType, Gender, PaymentMethod, ProductCategory,
    TrafficSource, Variant,
};
use chrono::NaiveDate;

/// Name of the single experiment simulated by the A/B test table.
pub const AB_TEST_NAME: &str = "Product_Page_Redesign";

/// Round to two decimal places (currency precision).
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_currency(value: f64) -> String {
    format!("{value:.2}")
}

fn format_bool(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

/// Daily web traffic for one (country, source, device) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficRecord {
    pub date: NaiveDate,
    pub country: Country,
    pub traffic_source: TrafficSource,
    pub device_type: DeviceType,
    pub sessions: u32,
    pub page_views: u32,
    pub bounce_rate: f64,
    /// Seconds.
    pub avg_session_duration: f64,
}

impl TableRow for TrafficRecord {
    const KIND: TableKind = TableKind::Traffic;

    fn column_names() -> &'static [&'static str] {
        &[
            "date",
            "country",
            "traffic_source",
            "device_type",
            "sessions",
            "page_views",
            "bounce_rate",
            "avg_session_duration",
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            format_date(self.date),
            self.country.to_string(),
            self.traffic_source.to_string(),
            self.device_type.to_string(),
            self.sessions.to_string(),
            self.page_views.to_string(),
            self.bounce_rate.to_string(),
            self.avg_session_duration.to_string(),
        ]
    }
}

/// A single synthetic purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order_id: u64,
    pub date: NaiveDate,
    pub country: Country,
    pub product_category: ProductCategory,
    pub order_value: f64,
    pub quantity: u8,
    pub customer_type: CustomerType,
    pub payment_method: PaymentMethod,
    pub shipping_cost: f64,
    pub delivery_days: u8,
}

impl TableRow for OrderRecord {
    const KIND: TableKind = TableKind::Orders;

    fn column_names() -> &'static [&'static str] {
        &[
            "order_id",
            "date",
            "country",
            "product_category",
            "order_value",
            "quantity",
            "customer_type",
            "payment_method",
            "shipping_cost",
            "delivery_days",
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            format_date(self.date),
            self.country.to_string(),
            self.product_category.to_string(),
            format_currency(self.order_value),
            self.quantity.to_string(),
            self.customer_type.to_string(),
            self.payment_method.to_string(),
            format_currency(self.shipping_cost),
            self.delivery_days.to_string(),
        ]
    }
}

/// A synthetic customer profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub customer_id: u64,
    pub registration_date: NaiveDate,
    pub country: Country,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub acquisition_channel: TrafficSource,
    pub email_subscribed: bool,
    pub total_orders: u32,
    pub lifetime_value: f64,
}

impl TableRow for CustomerRecord {
    const KIND: TableKind = TableKind::Customers;

    fn column_names() -> &'static [&'static str] {
        &[
            "customer_id",
            "registration_date",
            "country",
            "age_group",
            "gender",
            "acquisition_channel",
            "email_subscribed",
            "total_orders",
            "lifetime_value",
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.customer_id.to_string(),
            format_date(self.registration_date),
            self.country.to_string(),
            self.age_group.to_string(),
            self.gender.to_string(),
            self.acquisition_channel.to_string(),
            format_bool(self.email_subscribed),
            self.total_orders.to_string(),
            format_currency(self.lifetime_value),
        ]
    }
}

/// One day of one experiment arm.
#[derive(Debug, Clone, PartialEq)]
pub struct ABTestRecord {
    pub date: NaiveDate,
    pub test_name: &'static str,
    pub variant: Variant,
    pub sessions: u64,
    pub conversions: u64,
    /// Observed `conversions / sessions`, or 0 when there were no sessions.
    pub conversion_rate: f64,
    pub revenue: f64,
}

impl TableRow for ABTestRecord {
    const KIND: TableKind = TableKind::AbTests;

    fn column_names() -> &'static [&'static str] {
        &[
            "date",
            "test_name",
            "variant",
            "sessions",
            "conversions",
            "conversion_rate",
            "revenue",
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            format_date(self.date),
            self.test_name.to_string(),
            self.variant.to_string(),
            self.sessions.to_string(),
            self.conversions.to_string(),
            self.conversion_rate.to_string(),
            format_currency(self.revenue),
        ]
    }
}

/// The four tables of a single generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub traffic: Vec<TrafficRecord>,
    pub orders: Vec<OrderRecord>,
    pub customers: Vec<CustomerRecord>,
    pub ab_tests: Vec<ABTestRecord>,
}

impl Dataset {
    /// Row count of one table.
    pub fn row_count(&self, table: TableKind) -> usize {
        match table {
            TableKind::Traffic => self.traffic.len(),
            TableKind::Orders => self.orders.len(),
            TableKind::Customers => self.customers.len(),
            TableKind::AbTests => self.ab_tests.len(),
        }
    }
}
