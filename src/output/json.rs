//! JSON season report writer.
//!
//! Writes season snapshots to JSON files with proper formatting.

use super::report::SeasonReport;
use crate::aggregator::SeasonStats;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a season report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = SeasonReport::new(stats, Some(2024));
/// write_season_report(&report, "season-2024.json")?;
/// ```
pub fn write_season_report(
    report: &SeasonReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_pretty(report, output_path.as_ref())
}

/// Write a bare season snapshot (no envelope)
pub fn write_season_stats(
    stats: &SeasonStats,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_pretty(stats, output_path.as_ref())
}

fn write_pretty<T: Serialize>(value: &T, output_path: &Path) -> Result<(), OutputError> {
    info!("Writing season report to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(OutputError::SerializationFailed)?;

    info!(
        "Season report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a season report from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_season_report(input_path: impl AsRef<Path>) -> Result<SeasonReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading season report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: SeasonReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Season report loaded: version {}, {} matches",
        report.version, report.stats.total_matches
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::compute_season_stats;
    use crate::parser::parse_matches;
    use serde_json::json;
    use tempfile::NamedTempFile;

    fn create_test_stats() -> SeasonStats {
        let raw = json!([{
            "date": "2024-02-10T20:00:00Z",
            "goalsTeam1": 2,
            "goalsTeam2": 1,
            "players1": [{ "id": "p1", "name": "Joel", "isGK": false, "goals": 2, "assists": 0 }],
            "players2": [{ "id": "p2", "name": "Celso", "isGK": false, "goals": 1, "assists": 0 }]
        }]);
        compute_season_stats(&parse_matches(&raw).unwrap()).unwrap()
    }

    #[test]
    fn test_write_and_read_report() {
        let report = SeasonReport::new(create_test_stats(), Some(2024));
        let temp_file = NamedTempFile::new().unwrap();

        write_season_report(&report, temp_file.path()).unwrap();
        let loaded = read_season_report(temp_file.path()).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.year, Some(2024));
        assert_eq!(loaded.stats.total_goals, 3);
        assert_eq!(loaded.stats.top_scorer.unwrap().id, "p1");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/season.json");

        write_season_stats(&create_test_stats(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_season_stats(&create_test_stats(), temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
