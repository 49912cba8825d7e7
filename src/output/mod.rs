//! Output writers for season reports.
//!
//! This module handles writing data to disk and to the terminal:
//! - JSON season reports
//! - Text summaries (season page, history, overviews, award tally)

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_season_report, write_season_report, write_season_stats};
pub use report::SeasonReport;
pub use text::{
    render_history, render_season_overviews, render_season_summary, render_vote_tally,
};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
