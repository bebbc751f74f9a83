//! Dataset generation parameters, loadable from YAML.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```yaml
//! seed: 42
//! history_days: 180
//! ab_test_days: 30
//! customer_count: 2000
//! customer_id_start: 1000
//! order_id_start: 1
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_HISTORY_DAYS: u32 = 180;
pub const DEFAULT_AB_TEST_DAYS: u32 = 30;
pub const DEFAULT_CUSTOMER_COUNT: u64 = 2000;
pub const DEFAULT_CUSTOMER_ID_START: u64 = 1000;
pub const DEFAULT_ORDER_ID_START: u64 = 1;

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A value that parses but cannot drive generation
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Parameters of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// Base seed; every table stream is derived from it
    pub seed: u64,

    /// Days of history before the reference date
    pub history_days: u32,

    /// Trailing days covered by the A/B test table
    pub ab_test_days: u32,

    /// Number of customer profiles
    pub customer_count: u64,

    /// First customer id
    pub customer_id_start: u64,

    /// First order id
    pub order_id_start: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            history_days: DEFAULT_HISTORY_DAYS,
            ab_test_days: DEFAULT_AB_TEST_DAYS,
            customer_count: DEFAULT_CUSTOMER_COUNT,
            customer_id_start: DEFAULT_CUSTOMER_ID_START,
            order_id_start: DEFAULT_ORDER_ID_START,
        }
    }
}

impl DatasetConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: DatasetConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the values that would make generation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_days == 0 {
            return Err(ConfigError::Invalid {
                field: "history_days",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.ab_test_days == 0 {
            return Err(ConfigError::Invalid {
                field: "ab_test_days",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.customer_id_start.checked_add(self.customer_count).is_none() {
            return Err(ConfigError::Invalid {
                field: "customer_count",
                reason: "customer ids would overflow".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatasetConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.history_days, 180);
        assert_eq!(config.ab_test_days, 30);
        assert_eq!(config.customer_count, 2000);
        assert_eq!(config.customer_id_start, 1000);
        assert_eq!(config.order_id_start, 1);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DatasetConfig::from_yaml("seed: 7\ncustomer_count: 50\n").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.customer_count, 50);
        assert_eq!(config.history_days, 180);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            DatasetConfig::from_yaml("").unwrap(),
            DatasetConfig::default()
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = DatasetConfig::from_yaml("seeds: 7\n");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_zero_history_rejected() {
        let result = DatasetConfig::from_yaml("history_days: 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "history_days",
                ..
            })
        ));
    }

    #[test]
    fn test_with_seed() {
        assert_eq!(DatasetConfig::default().with_seed(9).seed, 9);
    }
}
