//! Configuration system for TargetSeek.
//!
//! Load search configuration from TOML or YAML files to control quantization
//! and search limits without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use targetseek_config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     decimal_places = 2
//!
//!     [limits]
//!     max_values = 500
//!     max_product_values = 24
//! "#).unwrap();
//!
//! assert_eq!(config.decimal_places, 2);
//! assert_eq!(config.limits.max_values, 500);
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use targetseek_config::SearchConfig;
//!
//! let config = SearchConfig::load("targetseek.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

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

impl From<ConfigError> for targetseek_core::SeekError {
    fn from(err: ConfigError) -> Self {
        targetseek_core::SeekError::Config(err.to_string())
    }
}

/// Main search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Decimal places preserved when the sum solver quantizes values to
    /// integers. 0 means plain integers; 2 suits currency amounts.
    #[serde(default)]
    pub decimal_places: u32,

    /// Search limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            decimal_places: 0,
            limits: LimitsConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the quantization scale.
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the overall value-count limit.
    pub fn with_max_values(mut self, max_values: usize) -> Self {
        self.limits.max_values = max_values;
        self
    }

    /// Sets the product-search value-count limit.
    pub fn with_max_product_values(mut self, max_product_values: usize) -> Self {
        self.limits.max_product_values = max_product_values;
        self
    }

    /// Sets the DP table cell limit for the sum solver.
    pub fn with_max_table_cells(mut self, max_table_cells: u64) -> Self {
        self.limits.max_table_cells = max_table_cells;
        self
    }

    /// Sets the node budget for the product search.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.limits.node_limit = node_limit;
        self
    }

    /// Checks internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for zero limits or a quantization
    /// scale that overflows `i64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal_places > 15 {
            return Err(ConfigError::Invalid(format!(
                "decimal_places must be at most 15, got {}",
                self.decimal_places
            )));
        }
        if self.limits.max_values == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_values must be at least 1".to_string(),
            ));
        }
        if self.limits.max_table_cells == 0 || self.limits.node_limit == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_table_cells and limits.node_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the multiplier used to quantize values for the sum solver.
    pub fn quantization_scale(&self) -> f64 {
        10f64.powi(self.decimal_places as i32)
    }
}

/// Limits that keep a search from exhausting memory or hanging.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LimitsConfig {
    /// Maximum number of input values for any mode.
    #[serde(default = "default_max_values")]
    pub max_values: usize,

    /// Maximum number of input values for product mode, which is
    /// exponential in the worst case.
    #[serde(default = "default_max_product_values")]
    pub max_product_values: usize,

    /// Maximum number of cells in the subset-sum reachability table.
    #[serde(default = "default_max_table_cells")]
    pub max_table_cells: u64,

    /// Maximum number of nodes the product search may explore.
    #[serde(default = "default_node_limit")]
    pub node_limit: u64,
}

fn default_max_values() -> usize {
    10_000
}

fn default_max_product_values() -> usize {
    30
}

fn default_max_table_cells() -> u64 {
    10_000_000
}

fn default_node_limit() -> u64 {
    10_000_000
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_values: default_max_values(),
            max_product_values: default_max_product_values(),
            max_table_cells: default_max_table_cells(),
            node_limit: default_node_limit(),
        }
    }
}
