//! History and season-overview commands.

use super::models::HistoryArgs;
use super::season::{validate_input, validate_year};
use crate::aggregator::{match_history, season_overviews};
use crate::output::{render_history, render_season_overviews};
use crate::parser::{filter_by_year, load_matches};
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Print the match history
pub fn execute_history(args: HistoryArgs) -> Result<()> {
    validate_history_args(&args)?;

    let matches = load_matches(&args.input)
        .with_context(|| format!("Failed to load matches from {}", args.input.display()))?;

    let season = match args.year {
        Some(year) => filter_by_year(&matches, year),
        None => matches,
    };

    if season.is_empty() {
        println!("No data for this season");
        return Ok(());
    }

    let history = match_history(&season);
    info!("{} matches in history", history.len());
    println!("{}", render_history(&history, args.limit));

    Ok(())
}

/// Validate history arguments
pub fn validate_history_args(args: &HistoryArgs) -> Result<()> {
    validate_input(&args.input)?;

    if let Some(year) = args.year {
        validate_year(year)?;
    }

    if args.limit == 0 {
        anyhow::bail!("limit must be greater than 0");
    }

    Ok(())
}

/// Print one row per season found in the export
pub fn execute_seasons(input: &Path) -> Result<()> {
    validate_input(input)?;

    let matches = load_matches(input)
        .with_context(|| format!("Failed to load matches from {}", input.display()))?;

    let overviews = season_overviews(&matches);
    if overviews.is_empty() {
        println!("No seasons found");
        return Ok(());
    }

    println!("{}", render_season_overviews(&overviews));
    Ok(())
}
