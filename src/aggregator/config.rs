//! Aggregation settings.
//!
//! Loads the optional `[aggregation]` table from TOML. Every key falls back
//! to the league defaults in `utils::config`.

use crate::utils::config::{MIN_MATCHES_FOR_RATIO, TOP_LIST_SIZE};
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tuning for ratio gates and ranking tables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Matches needed to qualify for a ratio superlative
    pub min_matches_for_ratio: u32,

    /// Length of the top scorers / assisters / wins tables
    pub top_list_size: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            min_matches_for_ratio: MIN_MATCHES_FOR_RATIO,
            top_list_size: TOP_LIST_SIZE,
        }
    }
}

impl AggregationConfig {
    /// Reject settings that would empty every table or gate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_matches_for_ratio == 0 {
            return Err(ConfigError::Invalid(
                "min_matches_for_ratio must be greater than 0".to_string(),
            ));
        }

        if self.top_list_size == 0 {
            return Err(ConfigError::Invalid(
                "top_list_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    aggregation: AggregationConfig,
}

/// Parse aggregation settings from TOML text
pub fn parse_config(contents: &str) -> Result<AggregationConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(contents)?;
    file.aggregation.validate()?;
    Ok(file.aggregation)
}

/// Load aggregation settings from a TOML file
///
/// # Example
/// ```ignore
/// let config = load_config("mejengas.toml")?;
/// let stats = compute_season_stats_with(&matches, &config);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AggregationConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading aggregation config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}
