//! Store Configuration
//!
//! Settings read from JSON. Missing fields fall back to defaults.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Length at which the add command is disabled
pub const DEFAULT_MAX_DISPLAYED: usize = 10;

/// Which master list to start from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeedKind {
    /// "One".."Ten" with random amounts
    #[default]
    Named,
    /// `Item_i` for `i` in `0..count`
    Indexed { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_max_displayed")]
    pub max_displayed: usize,
    #[serde(default)]
    pub seed: SeedKind,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_displayed() -> usize {
    DEFAULT_MAX_DISPLAYED
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_displayed: default_max_displayed(),
            seed: SeedKind::default(),
            log_level: default_log_level(),
        }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_displayed == 0 {
            return Err(ConfigError::Invalid("max_displayed must be at least 1".into()));
        }
        if let SeedKind::Indexed { count: 0 } = self.seed {
            return Err(ConfigError::Invalid("indexed seed needs a positive count".into()));
        }
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level: {}", self.log_level)))?;
        Ok(())
    }

    /// Parsed log level; `Info` if the field was never validated
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
