use crate::aggregator::compute_season_stats;
use crate::parser::{available_years, load_matches, validate_matches};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a match export file
pub fn validate_matches_file(file_path: PathBuf) -> Result<()> {
    println!("Validating matches: {}", file_path.display());

    let matches = load_matches(&file_path)
        .with_context(|| format!("Failed to load matches from {}", file_path.display()))?;

    println!("✓ Valid match JSON");
    println!("  Matches: {}", matches.len());

    let years: Vec<String> = available_years(&matches)
        .iter()
        .map(i32::to_string)
        .collect();
    println!("  Seasons: {}", years.join(", "));

    if let Some(stats) = compute_season_stats(&matches) {
        println!("  Goals: {}", stats.total_goals);
        println!("  Field players: {}", stats.all_player_stats.len());
        println!("  Goalkeepers: {}", stats.all_gk_stats.len());
    }

    let warnings = validate_matches(&matches);
    if warnings.is_empty() {
        println!("  No warnings");
    } else {
        println!("  Warnings ({}):", warnings.len());
        for warning in &warnings {
            println!("    - {}", warning);
        }
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Mejenga Stats Season Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  year: number?              - Season year (absent for all seasons)");
        println!("  generatedAt: string        - ISO 8601 timestamp");
        println!("  stats: object              - Season snapshot");
        println!("    totalMatches: number     - Matches in the season");
        println!("    totalGoals: number       - Goals of both teams");
        println!("    allPlayerStats: array    - Field players, most goals first");
        println!("    allGKStats: array        - Goalkeepers, best average first");
        println!("    topScorer .. gkMostCleanSheets: object? - Superlatives");
        println!("    bestGoalsPerMatch .. gkBestCleanSheetRate: object? - Ratio picks (min. matches)");
        println!("    topScorersList, topAssistersList, mostWins: array - Top tables");
        println!("  ratios: {{ value: number, display: string }}");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Mejenga Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Season Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Season statistics for amateur soccer matches.");
}
