//! Match document definitions.
//!
//! These mirror the documents kept in the match store. Field names follow
//! the store's camelCase layout so exports can be read without remapping.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single played match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Document id (only present in keyed exports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When the match was played
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub goals_team1: u32,

    #[serde(default)]
    pub goals_team2: u32,

    /// Team 1 roster, one entry per slot
    #[serde(default, deserialize_with = "null_as_empty")]
    pub players1: Vec<MatchPlayerEntry>,

    /// Team 2 roster, one entry per slot
    #[serde(default, deserialize_with = "null_as_empty")]
    pub players2: Vec<MatchPlayerEntry>,
}

/// One roster slot in a match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayerEntry {
    /// Roster id, stable across matches
    #[serde(default)]
    pub id: String,

    /// Display name at match time
    #[serde(default)]
    pub name: String,

    /// Played in goal for this match
    #[serde(default, rename = "isGK")]
    pub is_gk: bool,

    #[serde(default)]
    pub goals: u32,

    #[serde(default)]
    pub assists: u32,
}

/// Which side of a match an entry played on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Team1,
    Team2,
}

/// Final result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchOutcome {
    Team1Win,
    Team2Win,
    Draw,
}

/// Result of a match from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamResult {
    Won,
    Draw,
    Lost,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::Team1, TeamSide::Team2];
}

impl MatchRecord {
    /// Roster for one side
    pub fn players(&self, side: TeamSide) -> &[MatchPlayerEntry] {
        match side {
            TeamSide::Team1 => &self.players1,
            TeamSide::Team2 => &self.players2,
        }
    }

    /// Goals scored by one side
    pub fn goals_for(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Team1 => self.goals_team1,
            TeamSide::Team2 => self.goals_team2,
        }
    }

    /// Goals conceded by one side
    pub fn goals_against(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Team1 => self.goals_team2,
            TeamSide::Team2 => self.goals_team1,
        }
    }

    /// Total goals in the match
    pub fn total_goals(&self) -> u64 {
        u64::from(self.goals_team1) + u64::from(self.goals_team2)
    }

    pub fn outcome(&self) -> MatchOutcome {
        use std::cmp::Ordering;

        match self.goals_team1.cmp(&self.goals_team2) {
            Ordering::Greater => MatchOutcome::Team1Win,
            Ordering::Less => MatchOutcome::Team2Win,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Result credited to every entry of `side`
    pub fn result_for(&self, side: TeamSide) -> TeamResult {
        match (self.outcome(), side) {
            (MatchOutcome::Draw, _) => TeamResult::Draw,
            (MatchOutcome::Team1Win, TeamSide::Team1) | (MatchOutcome::Team2Win, TeamSide::Team2) => {
                TeamResult::Won
            }
            _ => TeamResult::Lost,
        }
    }

    /// Calendar year of the match (UTC)
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Treat an explicit `null` roster the same as a missing one
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MatchPlayerEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MatchPlayerEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde adapter for match dates.
///
/// Reads RFC 3339 strings, plain `YYYY-MM-DD` dates, epoch milliseconds and
/// exported store timestamps (`{"seconds", "nanoseconds"}`, optionally with
/// leading underscores). Always writes RFC 3339.
pub mod timestamp {
    use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::utils::error::ParseError;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Millis(i64),
        Document {
            #[serde(alias = "_seconds")]
            seconds: i64,
            #[serde(default, alias = "_nanoseconds")]
            nanoseconds: u32,
        },
    }

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTimestamp::deserialize(deserializer)?;
        to_datetime(raw).map_err(serde::de::Error::custom)
    }

    fn to_datetime(raw: RawTimestamp) -> Result<DateTime<Utc>, ParseError> {
        match raw {
            RawTimestamp::Text(text) => parse_text(&text),
            RawTimestamp::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| ParseError::InvalidTimestamp(format!("{} ms out of range", millis))),
            RawTimestamp::Document {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(seconds, nanoseconds).ok_or_else(|| {
                ParseError::InvalidTimestamp(format!(
                    "{}s {}ns out of range",
                    seconds, nanoseconds
                ))
            }),
        }
    }

    /// Parse a textual date (RFC 3339 first, then a bare calendar date)
    pub fn parse_text(text: &str) -> Result<DateTime<Utc>, ParseError> {
        let text = text.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(text) {
            return Ok(date.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| ParseError::InvalidTimestamp(text.to_string()))
    }
}
