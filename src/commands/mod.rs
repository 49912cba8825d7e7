//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod history;
pub mod models;
pub mod season;
pub mod utils;
pub mod votes;

// Re-export main command functions
pub use history::{execute_history, execute_seasons, validate_history_args};
pub use models::{HistoryArgs, SeasonArgs, VotesArgs};
pub use season::{execute_season, validate_args};
pub use utils::{display_schema, display_version, validate_matches_file};
pub use votes::execute_votes;
