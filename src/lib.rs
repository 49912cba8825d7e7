//! Mejenga Stats
//!
//! Season statistics for amateur soccer ("mejengas") matches: per-player
//! and per-goalkeeper season lines, superlatives, ranking tables, match
//! history and the Balón de Oro vote tally.
//!
//! ## Getting Started
//!
//! ```ignore
//! use mejenga_stats::aggregator::compute_season_stats;
//! use mejenga_stats::parser::{filter_by_year, load_matches};
//!
//! let matches = load_matches("matches.json")?;
//! match compute_season_stats(&filter_by_year(&matches, 2024)) {
//!     Some(stats) => println!("{} goals", stats.total_goals),
//!     None => println!("No data for this season"),
//! }
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
pub mod voting;
