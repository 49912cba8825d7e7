use crate::utils::config::DEFAULT_REPORT_PATH;
use std::path::PathBuf;

/// Arguments for the season command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SeasonArgs {
    /// Match export to read
    pub input: PathBuf,

    /// Season year (None = every match in the file)
    pub year: Option<i32>,

    /// Output path for the JSON season report (None = do not write)
    pub output: Option<PathBuf>,

    /// Aggregation config TOML (optional)
    pub config: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for SeasonArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("matches.json"),
            year: None,
            output: Some(PathBuf::from(DEFAULT_REPORT_PATH)),
            config: None,
            print_summary: false,
        }
    }
}

/// Arguments for the history command
#[derive(Debug, Clone)]
pub struct HistoryArgs {
    pub input: PathBuf,
    pub year: Option<i32>,

    /// Maximum rows to print
    pub limit: usize,
}

impl Default for HistoryArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("matches.json"),
            year: None,
            limit: 20,
        }
    }
}

/// Arguments for the votes command
#[derive(Debug, Clone)]
pub struct VotesArgs {
    /// Vote export to read
    pub input: PathBuf,
    pub year: i32,
}
