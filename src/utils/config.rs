//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Minimum matches before a player qualifies for a ratio superlative
pub const MIN_MATCHES_FOR_RATIO: u32 = 3;

/// Length of the top scorers / assisters / wins tables
pub const TOP_LIST_SIZE: usize = 5;

// Exports wrap the match list under different keys
pub const MATCH_LIST_FIELD_NAMES: &[&str] = &["matches", "partidos", "documents", "docs"];

/// Lowest and highest season year accepted on the command line
pub const MIN_SEASON_YEAR: i32 = 1900;
pub const MAX_SEASON_YEAR: i32 = 2100;

/// Season report path used when `--output` is not given
pub const DEFAULT_REPORT_PATH: &str = "artifacts/season.json";
