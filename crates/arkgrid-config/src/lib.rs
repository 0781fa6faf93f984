//! Configuration system for the Ark Grid solver.
//!
//! Load rule tables and search settings from TOML or YAML files without
//! code changes. Every section is optional; missing sections fall back to
//! the live game tables and an unbounded, pruned search.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use arkgrid_config::{CoreOrder, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [search]
//!     core_order = "tightest_capacity_first"
//!     node_limit = 500000
//!
//!     [rules.destiny]
//!     threshold = 14
//!     bonus = 12.0
//! "#).unwrap();
//!
//! assert_eq!(config.search.core_order, CoreOrder::TightestCapacityFirst);
//! assert_eq!(config.search.node_limit, Some(500_000));
//! assert_eq!(config.rules.destiny.bonus, 12.0);
//! assert_eq!(config.rules.max_astrogems_per_core, 4);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use arkgrid_config::SolverConfig;
//!
//! let config = SolverConfig::load("arkgrid.toml").unwrap_or_default();
//! assert!(config.search.enable_pruning);
//! ```

use std::fmt;
use std::path::Path;

use arkgrid_core::{ArkGridError, RuleSet};
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

impl From<ConfigError> for ArkGridError {
    fn from(err: ConfigError) -> Self {
        ArkGridError::Config(err.to_string())
    }
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Rarity tables, breakpoint weights and bonuses.
    #[serde(default)]
    pub rules: RuleSet,

    /// Branch-and-bound settings.
    #[serde(default)]
    pub search: SearchConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// describes rules that violate their invariants.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
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

    /// Replaces the rule tables.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the order in which cores are decided.
    pub fn with_core_order(mut self, core_order: CoreOrder) -> Self {
        self.search.core_order = core_order;
        self
    }

    /// Caps the number of search nodes per partition.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.search.node_limit = Some(limit);
        self
    }

    /// Enables or disables bound-based pruning.
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.search.enable_pruning = enabled;
        self
    }

    /// Checks the rule tables and search settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if self.search.node_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "search.node_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Branch-and-bound settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Order in which the cores of a partition are decided.
    pub core_order: CoreOrder,

    /// Maximum number of nodes explored per partition (None = unlimited).
    pub node_limit: Option<u64>,

    /// Whether to prune branches whose bound cannot beat the incumbent.
    pub enable_pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            core_order: CoreOrder::RarityPriority,
            node_limit: None,
            enable_pruning: true,
        }
    }
}

/// Order in which cores are decided during the search.
///
/// Any order yields the same optimum; the order only changes how early
/// good incumbents are found and therefore how much is pruned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreOrder {
    /// Ancient, Relic, Legendary, then Epic.
    #[default]
    RarityPriority,

    /// Ascending max willpower.
    TightestCapacityFirst,

    /// Order in which cores were supplied.
    Input,
}

impl fmt::Display for CoreOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreOrder::RarityPriority => write!(f, "RarityPriority"),
            CoreOrder::TightestCapacityFirst => write!(f, "TightestCapacityFirst"),
            CoreOrder::Input => write!(f, "Input"),
        }
    }
}
