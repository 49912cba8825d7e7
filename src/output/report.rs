//! Versioned envelope written around a season snapshot.

use crate::aggregator::SeasonStats;
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Season report as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Season year, absent when every match was aggregated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub stats: SeasonStats,
}

impl SeasonReport {
    pub fn new(stats: SeasonStats, year: Option<i32>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            year,
            generated_at: Utc::now().to_rfc3339(),
            stats,
        }
    }
}
