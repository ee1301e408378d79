//! Configuration system for Extrema.
//!
//! Load dataset, sweep and search settings from TOML or YAML files so a run
//! can be repeated without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use extrema_config::{ExtremaConfig, ValueColumn};
//!
//! let config = ExtremaConfig::from_toml_str(r#"
//!     [dataset]
//!     path = "transactions.csv"
//!
//!     [dataset.value]
//!     type = "revenue"
//!     quantity_column = "qty"
//!     price_column = "price"
//!
//!     [sweep]
//!     max_size = 10000
//!     step = 500
//!     repeat_count = 5
//! "#).unwrap();
//!
//! assert_eq!(config.sweep.step, 500);
//! assert_eq!(config.sweep.recursion_ceiling, Some(2000));
//! assert!(matches!(config.dataset.value, ValueColumn::Revenue { .. }));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use extrema_config::ExtremaConfig;
//!
//! let config = ExtremaConfig::load("extrema.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main Extrema configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExtremaConfig {
    /// Tabular input settings.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Synthetic sample generation, used when no dataset path is given.
    #[serde(default)]
    pub samples: SampleConfig,

    /// Size sweep settings.
    #[serde(default)]
    pub sweep: SweepConfig,

    /// Single-size search settings.
    #[serde(default)]
    pub search: SearchConfig,
}

impl ExtremaConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the dataset path.
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset.path = Some(path.into());
        self
    }

    /// Sets the synthetic sample seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.samples.seed = Some(seed);
        self
    }

    /// Checks constraints that do not depend on the loaded data.
    ///
    /// Bounds that depend on the sample length are checked by the benchmark
    /// runner at run time.
    ///
    /// # Examples
    ///
    /// ```
    /// use extrema_config::ExtremaConfig;
    ///
    /// let mut config = ExtremaConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.sweep.step = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples.min_value > self.samples.max_value {
            return Err(ConfigError::Invalid(format!(
                "samples.min_value ({}) exceeds samples.max_value ({})",
                self.samples.min_value, self.samples.max_value
            )));
        }
        if self.sweep.step == 0 {
            return Err(ConfigError::Invalid("sweep.step must be positive".into()));
        }
        if self.sweep.repeat_count == 0 {
            return Err(ConfigError::Invalid(
                "sweep.repeat_count must be positive".into(),
            ));
        }
        if self.sweep.max_size < self.sweep.step {
            return Err(ConfigError::Invalid(format!(
                "sweep.max_size ({}) is smaller than sweep.step ({})",
                self.sweep.max_size, self.sweep.step
            )));
        }
        if self.search.size == 0 {
            return Err(ConfigError::Invalid("search.size must be positive".into()));
        }
        Ok(())
    }
}

/// Tabular input configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DatasetConfig {
    /// CSV file to read. Synthetic samples are used when absent.
    pub path: Option<PathBuf>,

    /// How the numeric value of each row is obtained.
    pub value: ValueColumn,

    /// Column used for the per-category breakdown.
    pub category_column: Option<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: None,
            value: ValueColumn::default(),
            category_column: Some("product_category".to_string()),
        }
    }
}

/// Source of the numeric value searched in each row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueColumn {
    /// Derived revenue: quantity × unit price.
    Revenue {
        #[serde(default = "default_quantity_column")]
        quantity_column: String,
        #[serde(default = "default_price_column")]
        price_column: String,
    },

    /// A single numeric column used as-is.
    Column { name: String },
}

impl Default for ValueColumn {
    fn default() -> Self {
        ValueColumn::Revenue {
            quantity_column: default_quantity_column(),
            price_column: default_price_column(),
        }
    }
}

impl ValueColumn {
    /// Columns that must be present in the table header.
    pub fn required_columns(&self) -> Vec<&str> {
        match self {
            ValueColumn::Revenue {
                quantity_column,
                price_column,
            } => vec![quantity_column.as_str(), price_column.as_str()],
            ValueColumn::Column { name } => vec![name.as_str()],
        }
    }
}

fn default_quantity_column() -> String {
    "transaction_qty".to_string()
}

fn default_price_column() -> String {
    "unit_price".to_string()
}

/// Synthetic sample configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SampleConfig {
    /// Random seed for reproducible samples.
    pub seed: Option<u64>,

    /// Smallest generated value (inclusive).
    pub min_value: i64,

    /// Largest generated value (inclusive).
    pub max_value: i64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_value: 50_000,
            max_value: 5_000_000,
        }
    }
}

/// Size sweep configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SweepConfig {
    /// Largest prefix size measured.
    pub max_size: usize,

    /// Increment between measured sizes.
    pub step: usize,

    /// Measured runs per strategy and size.
    pub repeat_count: usize,

    /// Largest size at which the recursive search is measured.
    ///
    /// `None` (YAML `null`) measures it at every size.
    pub recursion_ceiling: Option<usize>,

    /// Unmeasured runs before each measurement.
    pub warmup_count: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_size: 5000,
            step: 100,
            repeat_count: 3,
            recursion_ceiling: Some(2000),
            warmup_count: 0,
        }
    }
}

/// Single-size search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Prefix size searched. Clamped to the available data by the caller.
    pub size: usize,

    /// Largest size at which the recursive search runs.
    pub recursion_ceiling: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            size: 10_000,
            recursion_ceiling: Some(1_000_000),
        }
    }
}

#[cfg(test)]
mod tests;
