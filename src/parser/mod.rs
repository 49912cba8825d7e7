//! Match document parsing and season selection.
//!
//! This module handles:
//! - Parsing match exports from the match store
//! - Normalizing timestamps
//! - Filtering a season out of the full match list
//! - Flagging suspicious documents

pub mod matches;
pub mod schema;

// Re-export main types
pub use matches::{available_years, filter_by_year, load_matches, parse_matches, validate_matches};
pub use schema::{MatchOutcome, MatchPlayerEntry, MatchRecord, TeamResult, TeamSide};
