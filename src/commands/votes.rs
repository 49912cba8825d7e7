//! Balón de Oro command.

use super::models::VotesArgs;
use super::season::{validate_input, validate_year};
use crate::output::render_vote_tally;
use crate::voting::{load_votes, tally_votes, winner, VoteTally};
use anyhow::{Context, Result};
use log::info;

/// Tally and print the award votes for one year
pub fn execute_votes(args: VotesArgs) -> Result<Vec<VoteTally>> {
    validate_input(&args.input)?;
    validate_year(args.year)?;

    let votes = load_votes(&args.input)
        .with_context(|| format!("Failed to load votes from {}", args.input.display()))?;

    let tallies = tally_votes(&votes, args.year);
    if let Some(leader) = winner(&tallies) {
        info!(
            "Balón de Oro {} leader: {} ({} votes)",
            args.year, leader.candidate_name, leader.votes
        );
    }

    println!("{}", render_vote_tally(&tallies, args.year));
    Ok(tallies)
}
