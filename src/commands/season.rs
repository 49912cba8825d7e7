//! Season command implementation.
//!
//! The season command:
//! 1. Loads the match export
//! 2. Selects the season
//! 3. Aggregates the statistics
//! 4. Writes the report and prints the summary

use super::models::SeasonArgs;
use crate::aggregator::{compute_season_stats_with, load_config, AggregationConfig};
use crate::output::{render_season_summary, write_season_report, SeasonReport};
use crate::parser::{filter_by_year, load_matches};
use crate::utils::config::{MAX_SEASON_YEAR, MIN_SEASON_YEAR};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Execute the season command
///
/// **Public** - main entry point called from main.rs
///
/// Returns the computed report, or `None` when the season has no matches.
///
/// # Errors
/// * Unreadable or malformed match export
/// * Invalid aggregation config
/// * File write errors
pub fn execute_season(args: SeasonArgs) -> Result<Option<SeasonReport>> {
    let start_time = Instant::now();

    info!("Step 1/4: Loading matches from {}...", args.input.display());
    let matches = load_matches(&args.input)
        .with_context(|| format!("Failed to load matches from {}", args.input.display()))?;

    info!("Step 2/4: Selecting season...");
    let season = match args.year {
        Some(year) => filter_by_year(&matches, year),
        None => matches,
    };
    debug!("{} matches in season", season.len());

    info!("Step 3/4: Aggregating statistics...");
    let config = match &args.config {
        Some(path) => load_config(path).context("Failed to load aggregation config")?,
        None => AggregationConfig::default(),
    };

    let Some(stats) = compute_season_stats_with(&season, &config) else {
        println!("No data for this season");
        return Ok(None);
    };

    let report = SeasonReport::new(stats, args.year);

    info!("Step 4/4: Writing output...");
    if let Some(output) = &args.output {
        write_season_report(&report, output).context("Failed to write season report JSON")?;
        info!("✓ Season report written to: {}", output.display());
    }

    if args.print_summary {
        println!("{}", render_season_summary(&report.stats, args.year));
    }

    let elapsed = start_time.elapsed();
    info!("Season computed in {:.2}s", elapsed.as_secs_f64());

    Ok(Some(report))
}

/// Validate season arguments
///
/// **Public** - can be called before execute_season for early validation
pub fn validate_args(args: &SeasonArgs) -> Result<()> {
    validate_input(&args.input)?;

    if let Some(year) = args.year {
        validate_year(year)?;
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

/// Reject empty input paths
pub fn validate_input(input: &Path) -> Result<()> {
    if input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }
    Ok(())
}

/// Reject years outside the supported range
pub fn validate_year(year: i32) -> Result<()> {
    if !(MIN_SEASON_YEAR..=MAX_SEASON_YEAR).contains(&year) {
        anyhow::bail!(
            "Year {} is out of range ({}-{})",
            year,
            MIN_SEASON_YEAR,
            MAX_SEASON_YEAR
        );
    }
    Ok(())
}
