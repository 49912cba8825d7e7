//! Season statistics snapshot.
//!
//! Turns a season's match list into per-player and per-goalkeeper lines,
//! superlatives and ranking tables. The computation is pure: the same list
//! in the same order always yields the same snapshot.

use super::accumulator::{accumulate, GoalkeeperSeasonStat, PlayerSeasonStat};
use super::config::AggregationConfig;
use super::superlatives::{
    pick_max, pick_max_qualified, pick_min, pick_min_qualified, top_by, top_positive_by,
};
use crate::parser::schema::MatchRecord;
use log::debug;
use serde::{Deserialize, Serialize};

/// Everything shown on the season page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStats {
    pub total_matches: usize,

    /// Goals of both teams over all matches
    pub total_goals: u64,

    /// Field players, most goals first
    pub all_player_stats: Vec<PlayerSeasonStat>,

    /// Goalkeepers, fewest goals received per match first
    #[serde(rename = "allGKStats")]
    pub all_gk_stats: Vec<GoalkeeperSeasonStat>,

    pub top_scorer: Option<PlayerSeasonStat>,
    pub top_assister: Option<PlayerSeasonStat>,
    pub most_games_played: Option<PlayerSeasonStat>,
    pub least_games_played: Option<PlayerSeasonStat>,

    pub gk_most_goals_received: Option<GoalkeeperSeasonStat>,
    pub gk_least_goals_received: Option<GoalkeeperSeasonStat>,
    pub gk_most_clean_sheets: Option<GoalkeeperSeasonStat>,

    // Ratio picks, gated on a minimum number of matches
    pub best_goals_per_match: Option<PlayerSeasonStat>,
    pub best_assists_per_match: Option<PlayerSeasonStat>,
    pub best_win_rate: Option<PlayerSeasonStat>,
    pub gk_best_average: Option<GoalkeeperSeasonStat>,
    pub gk_best_clean_sheet_rate: Option<GoalkeeperSeasonStat>,

    pub top_scorers_list: Vec<PlayerSeasonStat>,
    pub top_assisters_list: Vec<PlayerSeasonStat>,
    pub most_wins: Vec<PlayerSeasonStat>,
}

impl SeasonStats {
    /// Field-player line for a roster id
    pub fn player(&self, id: &str) -> Option<&PlayerSeasonStat> {
        self.all_player_stats.iter().find(|p| p.id == id)
    }

    /// Goalkeeper line for a roster id
    pub fn goalkeeper(&self, id: &str) -> Option<&GoalkeeperSeasonStat> {
        self.all_gk_stats.iter().find(|k| k.id == id)
    }
}

/// Compute season statistics with the default settings
///
/// **Public** - main entry point for aggregation
///
/// Returns `None` when `matches` is empty ("no data for this season").
pub fn compute_season_stats(matches: &[MatchRecord]) -> Option<SeasonStats> {
    compute_season_stats_with(matches, &AggregationConfig::default())
}

/// Compute season statistics with explicit settings
pub fn compute_season_stats_with(
    matches: &[MatchRecord],
    config: &AggregationConfig,
) -> Option<SeasonStats> {
    if matches.is_empty() {
        debug!("No matches to aggregate");
        return None;
    }

    let total_goals: u64 = matches.iter().map(MatchRecord::total_goals).sum();

    let (players, keepers) = accumulate(matches);
    let gate = config.min_matches_for_ratio;
    let limit = config.top_list_size;

    // Picks scan the insertion order; the sorted tables are built afterwards
    let top_scorer = pick_max(&players, |p| p.goals).cloned();
    let top_assister = pick_max(&players, |p| p.assists).cloned();
    let most_games_played = pick_max(&players, |p| p.matches).cloned();
    let least_games_played = pick_min(&players, |p| p.matches).cloned();

    let gk_most_goals_received = pick_max(&keepers, |k| k.goals_received).cloned();
    let gk_least_goals_received = pick_min(&keepers, |k| k.goals_received).cloned();
    let gk_most_clean_sheets = pick_max(&keepers, |k| k.clean_sheets).cloned();

    let best_goals_per_match =
        pick_max_qualified(&players, |p| p.matches >= gate, |p| p.goals_per_match.value).cloned();
    let best_assists_per_match =
        pick_max_qualified(&players, |p| p.matches >= gate, |p| p.assists_per_match.value)
            .cloned();
    let best_win_rate =
        pick_max_qualified(&players, |p| p.matches >= gate, |p| p.win_rate.value).cloned();
    let gk_best_average = pick_min_qualified(
        &keepers,
        |k| k.matches >= gate,
        |k| k.goals_received_per_match.value,
    )
    .cloned();
    let gk_best_clean_sheet_rate =
        pick_max_qualified(&keepers, |k| k.matches >= gate, |k| k.clean_sheet_rate.value)
            .cloned();

    let top_scorers_list = top_positive_by(&players, limit, |p| p.goals);
    let top_assisters_list = top_positive_by(&players, limit, |p| p.assists);
    let most_wins = top_by(&players, limit, |p| p.won);

    let mut all_player_stats = players;
    all_player_stats.sort_by(|a, b| b.goals.cmp(&a.goals));

    let mut all_gk_stats = keepers;
    all_gk_stats.sort_by(|a, b| {
        a.goals_received_per_match
            .compare(&b.goals_received_per_match)
    });

    debug!(
        "Season: {} matches, {} goals, {} players, {} goalkeepers",
        matches.len(),
        total_goals,
        all_player_stats.len(),
        all_gk_stats.len()
    );

    Some(SeasonStats {
        total_matches: matches.len(),
        total_goals,
        all_player_stats,
        all_gk_stats,
        top_scorer,
        top_assister,
        most_games_played,
        least_games_played,
        gk_most_goals_received,
        gk_least_goals_received,
        gk_most_clean_sheets,
        best_goals_per_match,
        best_assists_per_match,
        best_win_rate,
        gk_best_average,
        gk_best_clean_sheet_rate,
        top_scorers_list,
        top_assisters_list,
        most_wins,
    })
}
