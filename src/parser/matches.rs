//! Match list loading and season selection.
//!
//! Match exports come in a few shapes:
//! - a bare array of match documents
//! - an object wrapping the array (`{"matches": [...]}`)
//! - an object keyed by document id (`{"abc123": {...}, ...}`)
//!
//! All of them normalize to an ordered `Vec<MatchRecord>`. Order matters:
//! it decides ties in the season superlatives, so it is never changed here.

use super::schema::{MatchRecord, TeamSide};
use crate::utils::config::MATCH_LIST_FIELD_NAMES;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse raw match JSON into match records
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::InvalidFormat` - Input is not an array or object, or every
///   document in it failed to parse
pub fn parse_matches(raw: &Value) -> Result<Vec<MatchRecord>, ParseError> {
    match raw {
        Value::Array(documents) => parse_documents(documents.iter().map(|doc| (None, doc))),

        Value::Object(obj) => {
            // Wrapped list
            for field in MATCH_LIST_FIELD_NAMES {
                if let Some(Value::Array(documents)) = obj.get(*field) {
                    debug!("Match list found under '{}'", field);
                    return parse_documents(documents.iter().map(|doc| (None, doc)));
                }
            }

            // Keyed export: document id -> match
            debug!("Treating object as keyed export with {} documents", obj.len());
            parse_documents(obj.iter().map(|(key, doc)| (Some(key.as_str()), doc)))
        }

        _ => Err(ParseError::InvalidFormat(
            "Match data must be a JSON array or object".to_string(),
        )),
    }
}

/// Read and parse a match export from disk
///
/// **Public** - used by the CLI commands
pub fn load_matches(path: impl AsRef<Path>) -> Result<Vec<MatchRecord>, ParseError> {
    let path = path.as_ref();
    debug!("Reading matches from: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let raw: Value = serde_json::from_reader(reader)?;

    let matches = parse_matches(&raw)?;
    debug!("Loaded {} matches", matches.len());

    Ok(matches)
}

/// Parse individual match documents
///
/// **Private** - malformed documents are logged and skipped
fn parse_documents<'a>(
    documents: impl ExactSizeIterator<Item = (Option<&'a str>, &'a Value)>,
) -> Result<Vec<MatchRecord>, ParseError> {
    let total = documents.len();
    let mut matches = Vec::with_capacity(total);

    for (index, (key, document)) in documents.enumerate() {
        match serde_json::from_value::<MatchRecord>(document.clone()) {
            Ok(mut record) => {
                if record.id.is_none() {
                    record.id = key.map(str::to_string);
                }
                matches.push(record);
            }
            Err(e) => {
                warn!("Skipping match {} ({}): {}", index, key.unwrap_or("-"), e);
            }
        }
    }

    if matches.is_empty() && total > 0 {
        return Err(ParseError::InvalidFormat(
            "All match documents failed to parse".to_string(),
        ));
    }

    Ok(matches)
}

/// Keep the matches played in `year`, preserving order
pub fn filter_by_year(matches: &[MatchRecord], year: i32) -> Vec<MatchRecord> {
    let season: Vec<MatchRecord> = matches
        .iter()
        .filter(|m| m.year() == year)
        .cloned()
        .collect();

    debug!("Season {}: {} of {} matches", year, season.len(), matches.len());
    season
}

/// Distinct years with at least one match, newest first
pub fn available_years(matches: &[MatchRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = matches.iter().map(MatchRecord::year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Report suspicious match documents
///
/// Nothing here is fatal; the aggregator accepts all of these. The returned
/// messages are meant for the `validate` command.
pub fn validate_matches(matches: &[MatchRecord]) -> Vec<String> {
    let mut warnings = Vec::new();

    for (index, record) in matches.iter().enumerate() {
        let label = record
            .id
            .clone()
            .unwrap_or_else(|| format!("#{}", index));

        if record.players1.is_empty() && record.players2.is_empty() {
            warnings.push(format!("match {}: no players on either team", label));
            continue;
        }

        for side in TeamSide::BOTH {
            let scored: u64 = record
                .players(side)
                .iter()
                .filter(|entry| !entry.is_gk)
                .map(|entry| u64::from(entry.goals))
                .sum();

            if scored > u64::from(record.goals_for(side)) {
                warnings.push(format!(
                    "match {}: {:?} players scored {} but the team total is {}",
                    label,
                    side,
                    scored,
                    record.goals_for(side)
                ));
            }
        }

        for entry in record.players1.iter().chain(&record.players2) {
            if entry.id.is_empty() {
                warnings.push(format!(
                    "match {}: entry '{}' has no player id",
                    label, entry.name
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(date: &str, g1: u32, g2: u32) -> Value {
        json!({ "date": date, "goalsTeam1": g1, "goalsTeam2": g2, "players1": [], "players2": [] })
    }

    #[test]
    fn test_parse_array() {
        let raw = json!([doc("2024-01-01", 1, 0), doc("2024-01-08", 2, 2)]);
        let matches = parse_matches(&raw).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].goals_team1, 2);
    }

    #[test]
    fn test_parse_wrapped_list() {
        let raw = json!({ "matches": [doc("2024-01-01", 1, 0)] });
        assert_eq!(parse_matches(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_keyed_export_keeps_order_and_ids() {
        let raw = json!({ "zzz": doc("2024-01-01", 1, 0), "aaa": doc("2024-01-08", 0, 3) });
        let matches = parse_matches(&raw).unwrap();

        assert_eq!(matches[0].id.as_deref(), Some("zzz"));
        assert_eq!(matches[1].id.as_deref(), Some("aaa"));
    }

    #[test]
    fn test_malformed_documents_are_skipped() {
        let raw = json!([doc("2024-01-01", 1, 0), { "goalsTeam1": 4 }]);
        assert_eq!(parse_matches(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_all_malformed_is_error() {
        let raw = json!([{ "goalsTeam1": 4 }]);
        assert!(parse_matches(&raw).is_err());
    }

    #[test]
    fn test_scalar_is_error() {
        assert!(parse_matches(&json!(42)).is_err());
    }

    #[test]
    fn test_years() {
        let raw = json!([
            doc("2023-06-01", 0, 0),
            doc("2024-02-01", 0, 0),
            doc("2023-07-01", 0, 0)
        ]);
        let matches = parse_matches(&raw).unwrap();

        assert_eq!(available_years(&matches), vec![2024, 2023]);
        assert_eq!(filter_by_year(&matches, 2023).len(), 2);
        assert!(filter_by_year(&matches, 2022).is_empty());
    }

    #[test]
    fn test_validate_flags_empty_rosters() {
        let matches = parse_matches(&json!([doc("2024-01-01", 1, 0)])).unwrap();
        let warnings = validate_matches(&matches);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("no players"));
    }

    #[test]
    fn test_validate_flags_goal_mismatch() {
        let raw = json!([{
            "date": "2024-01-01",
            "goalsTeam1": 1,
            "goalsTeam2": 0,
            "players1": [{ "id": "p1", "name": "A", "goals": 3 }],
            "players2": [{ "id": "p2", "name": "B" }]
        }]);
        let warnings = validate_matches(&parse_matches(&raw).unwrap());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("team total is 1"));
    }

    #[test]
    fn test_validate_huge_goal_counts() {
        let raw = json!([{
            "date": "2024-01-01",
            "goalsTeam1": 4_000_000_000_u32,
            "goalsTeam2": 0,
            "players1": [
                { "id": "p1", "name": "A", "goals": 4_000_000_000_u32 },
                { "id": "p2", "name": "B", "goals": 4_000_000_000_u32 }
            ],
            "players2": [{ "id": "p3", "name": "C" }]
        }]);
        let warnings = validate_matches(&parse_matches(&raw).unwrap());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("scored 8000000000"));
    }
}
