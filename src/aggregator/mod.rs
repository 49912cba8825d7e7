//! Aggregation of match records into season statistics.
//!
//! This module transforms a season's match list into:
//! - Per-player and per-goalkeeper season lines
//! - Superlatives (top scorer, best averages, ...)
//! - Ranking tables
//! - Match history and per-year overviews

pub mod accumulator;
pub mod config;
pub mod history;
pub mod ratio;
pub mod season;
pub mod superlatives;

// Re-export main types and functions
pub use accumulator::{accumulate, GoalkeeperSeasonStat, PlayerSeasonStat, SeasonAccumulator};
pub use config::{load_config, parse_config, AggregationConfig};
pub use history::{match_history, season_overviews, MatchSummary, Scorer, SeasonOverview};
pub use ratio::{to_fixed, Ratio};
pub use season::{compute_season_stats, compute_season_stats_with, SeasonStats};
