//! Vote counting for the season award.

use crate::aggregator::ratio::Ratio;
use crate::aggregator::accumulator::PERCENT_DECIMALS;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A ballot cast by one voter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub voter_id: String,
    pub candidate_id: String,
    #[serde(default)]
    pub candidate_name: String,
    pub year: i32,
}

/// Votes received by one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub candidate_id: String,
    pub candidate_name: String,
    pub votes: u32,
    /// Share of the counted ballots
    pub percentage: Ratio,
}

/// Count the ballots of `year`
///
/// Candidates are ordered by votes, most first; candidates with equal votes
/// keep the order in which they first received a counted ballot.
pub fn tally_votes(votes: &[Vote], year: i32) -> Vec<VoteTally> {
    // Last ballot per voter wins
    let mut final_ballot: HashMap<&str, usize> = HashMap::new();
    for (index, vote) in votes.iter().enumerate().filter(|(_, v)| v.year == year) {
        final_ballot.insert(vote.voter_id.as_str(), index);
    }

    let mut tallies: Vec<VoteTally> = Vec::new();
    for (index, vote) in votes.iter().enumerate() {
        if final_ballot.get(vote.voter_id.as_str()) != Some(&index) {
            continue;
        }

        match tallies
            .iter_mut()
            .find(|t| t.candidate_id == vote.candidate_id)
        {
            Some(tally) => tally.votes += 1,
            None => tallies.push(VoteTally {
                candidate_id: vote.candidate_id.clone(),
                candidate_name: vote.candidate_name.clone(),
                votes: 1,
                percentage: Ratio::percent(0, 0, PERCENT_DECIMALS),
            }),
        }
    }

    let counted = final_ballot.len() as u32;
    for tally in &mut tallies {
        tally.percentage = Ratio::percent(tally.votes, counted, PERCENT_DECIMALS);
    }

    tallies.sort_by(|a, b| b.votes.cmp(&a.votes));

    debug!(
        "Tallied {} ballots for {} across {} candidates",
        counted,
        year,
        tallies.len()
    );

    tallies
}

/// Leading candidate, if any ballots were counted
pub fn winner(tallies: &[VoteTally]) -> Option<&VoteTally> {
    tallies.first()
}

/// Parse a JSON array of votes, skipping malformed entries
pub fn parse_votes(raw: &Value) -> Result<Vec<Vote>, ParseError> {
    let Value::Array(documents) = raw else {
        return Err(ParseError::InvalidFormat(
            "Votes must be a JSON array".to_string(),
        ));
    };

    let mut votes = Vec::with_capacity(documents.len());
    for (index, document) in documents.iter().enumerate() {
        match serde_json::from_value::<Vote>(document.clone()) {
            Ok(vote) => votes.push(vote),
            Err(e) => warn!("Skipping vote {}: {}", index, e),
        }
    }

    Ok(votes)
}

/// Read votes from a JSON file
pub fn load_votes(path: impl AsRef<Path>) -> Result<Vec<Vote>, ParseError> {
    let path = path.as_ref();
    debug!("Reading votes from: {}", path.display());

    let raw: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    parse_votes(&raw)
}
