//! Table identities and the row-to-text contract used by persistence.

use std::fmt;
use std::str::FromStr;

/// A record that can be written as one row of a delimited text table.
pub trait TableRow {
    /// Which table this row belongs to.
    const KIND: TableKind;

    /// Column names, in output order.
    fn column_names() -> &'static [&'static str];

    /// Field values rendered as text, in the same order as [`column_names`].
    ///
    /// [`column_names`]: TableRow::column_names
    fn to_record(&self) -> Vec<String>;
}

/// The four tables produced by one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    Traffic,
    Orders,
    Customers,
    AbTests,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::Traffic,
        TableKind::Orders,
        TableKind::Customers,
        TableKind::AbTests,
    ];

    /// Short name used on the command line and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Traffic => "traffic",
            TableKind::Orders => "orders",
            TableKind::Customers => "customers",
            TableKind::AbTests => "ab_tests",
        }
    }

    /// File name of the persisted table.
    pub fn file_name(&self) -> &'static str {
        match self {
            TableKind::Traffic => "website_traffic.csv",
            TableKind::Orders => "orders.csv",
            TableKind::Customers => "customers.csv",
            TableKind::AbTests => "ab_test_results.csv",
        }
    }

    /// Fixed index mixed into the base seed so each table draws from its own
    /// random stream.
    pub fn stream_index(&self) -> u64 {
        match self {
            TableKind::Traffic => 1,
            TableKind::Orders => 2,
            TableKind::Customers => 3,
            TableKind::AbTests => 4,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown table name.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown table '{0}' (expected one of: traffic, orders, customers, ab_tests)")]
pub struct UnknownTable(pub String);

impl FromStr for TableKind {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "traffic" | "website_traffic" => Ok(TableKind::Traffic),
            "orders" => Ok(TableKind::Orders),
            "customers" => Ok(TableKind::Customers),
            "ab_tests" | "ab_test" | "ab_test_results" => Ok(TableKind::AbTests),
            other => Err(UnknownTable(other.to_string())),
        }
    }
}
