//! Match history and per-year overviews.

use super::ratio::Ratio;
use crate::parser::schema::{MatchOutcome, MatchRecord, TeamSide};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the match history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: Option<String>,
    pub date: DateTime<Utc>,
    pub goals_team1: u32,
    pub goals_team2: u32,
    pub outcome: MatchOutcome,
    pub scorers_team1: Vec<Scorer>,
    pub scorers_team2: Vec<Scorer>,
}

/// A field player who scored in a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorer {
    pub name: String,
    pub goals: u32,
}

/// Totals for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonOverview {
    pub year: i32,
    pub total_matches: u32,
    pub total_goals: u64,
    pub average_goals_per_match: Ratio,
}

impl MatchSummary {
    pub fn from_record(record: &MatchRecord) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date,
            goals_team1: record.goals_team1,
            goals_team2: record.goals_team2,
            outcome: record.outcome(),
            scorers_team1: scorers(record, TeamSide::Team1),
            scorers_team2: scorers(record, TeamSide::Team2),
        }
    }

    /// Score line, e.g. `3 - 2`
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.goals_team1, self.goals_team2)
    }
}

fn scorers(record: &MatchRecord, side: TeamSide) -> Vec<Scorer> {
    record
        .players(side)
        .iter()
        .filter(|entry| !entry.is_gk && entry.goals > 0)
        .map(|entry| Scorer {
            name: entry.name.clone(),
            goals: entry.goals,
        })
        .collect()
}

/// Match history, newest first (equal dates keep their input order)
pub fn match_history(matches: &[MatchRecord]) -> Vec<MatchSummary> {
    let mut history: Vec<MatchSummary> = matches.iter().map(MatchSummary::from_record).collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history
}

/// Per-year totals, newest year first
pub fn season_overviews(matches: &[MatchRecord]) -> Vec<SeasonOverview> {
    let mut overviews: Vec<SeasonOverview> = Vec::new();

    for record in matches {
        let year = record.year();
        let overview = match overviews.iter_mut().position(|o| o.year == year) {
            Some(index) => &mut overviews[index],
            None => {
                overviews.push(SeasonOverview {
                    year,
                    total_matches: 0,
                    total_goals: 0,
                    average_goals_per_match: Ratio::from_value(0.0, 2),
                });
                let last = overviews.len() - 1;
                &mut overviews[last]
            }
        };

        overview.total_matches += 1;
        overview.total_goals += record.total_goals();
    }

    for overview in &mut overviews {
        let average = overview.total_goals as f64 / f64::from(overview.total_matches.max(1));
        overview.average_goals_per_match = Ratio::from_value(average, 2);
    }

    overviews.sort_by(|a, b| b.year.cmp(&a.year));
    overviews
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::MatchPlayerEntry;
    use chrono::TimeZone;

    fn game(year: i32, day: u32, g1: u32, g2: u32) -> MatchRecord {
        MatchRecord {
            id: Some(format!("{}-{}", year, day)),
            date: Utc.with_ymd_and_hms(year, 1, day, 19, 0, 0).unwrap(),
            goals_team1: g1,
            goals_team2: g2,
            players1: vec![
                MatchPlayerEntry {
                    id: "p1".to_string(),
                    name: "Bryan".to_string(),
                    goals: g1,
                    ..Default::default()
                },
                MatchPlayerEntry {
                    id: "g1".to_string(),
                    name: "Keylor".to_string(),
                    is_gk: true,
                    goals: 1,
                    ..Default::default()
                },
            ],
            players2: vec![],
        }
    }

    #[test]
    fn test_history_newest_first() {
        let matches = vec![game(2024, 1, 1, 0), game(2024, 15, 2, 2), game(2023, 20, 0, 1)];
        let history = match_history(&matches);

        let ids: Vec<&str> = history.iter().filter_map(|m| m.id.as_deref()).collect();
        assert_eq!(ids, vec!["2024-15", "2024-1", "2023-20"]);
        assert_eq!(history[0].outcome, MatchOutcome::Draw);
        assert_eq!(history[0].score_line(), "2 - 2");
    }

    #[test]
    fn test_scorers_skip_keepers_and_blanks() {
        let summary = MatchSummary::from_record(&game(2024, 1, 3, 0));
        assert_eq!(
            summary.scorers_team1,
            vec![Scorer {
                name: "Bryan".to_string(),
                goals: 3
            }]
        );

        let blank = MatchSummary::from_record(&game(2024, 2, 0, 0));
        assert!(blank.scorers_team1.is_empty());
    }

    #[test]
    fn test_season_overviews() {
        let matches = vec![game(2023, 1, 3, 0), game(2024, 1, 1, 1), game(2023, 8, 2, 2)];
        let overviews = season_overviews(&matches);

        assert_eq!(overviews.len(), 2);
        assert_eq!(overviews[0].year, 2024);
        assert_eq!(overviews[1].total_matches, 2);
        assert_eq!(overviews[1].total_goals, 7);
        assert_eq!(overviews[1].average_goals_per_match.display, "3.50");
    }
}
