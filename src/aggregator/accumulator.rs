//! Per-player accumulation over a season's matches.
//!
//! Field players and goalkeepers are bucketed separately by `isGK`: the
//! same roster id can own one record of each kind and the two are never
//! merged. Records keep first-insertion order, which is the order every
//! later tie-break relies on.

use super::ratio::Ratio;
use crate::parser::schema::{MatchPlayerEntry, MatchRecord, TeamResult, TeamSide};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decimals used for per-match averages
pub const AVERAGE_DECIMALS: usize = 2;

/// Decimals used for percentages
pub const PERCENT_DECIMALS: usize = 1;

/// Season line of a field player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonStat {
    pub id: String,
    pub name: String,
    pub matches: u32,
    pub goals: u32,
    pub assists: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub goals_per_match: Ratio,
    pub assists_per_match: Ratio,
    /// Percentage of matches won
    pub win_rate: Ratio,
}

/// Season line of a goalkeeper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalkeeperSeasonStat {
    pub id: String,
    pub name: String,
    pub matches: u32,
    pub goals_received: u32,
    pub clean_sheets: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub goals_received_per_match: Ratio,
    /// Percentage of matches without conceding
    pub clean_sheet_rate: Ratio,
    /// Percentage of matches won
    pub win_rate: Ratio,
}

impl PlayerSeasonStat {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            matches: 0,
            goals: 0,
            assists: 0,
            won: 0,
            draw: 0,
            lost: 0,
            goals_per_match: Ratio::per(0, 0, AVERAGE_DECIMALS),
            assists_per_match: Ratio::per(0, 0, AVERAGE_DECIMALS),
            win_rate: Ratio::percent(0, 0, PERCENT_DECIMALS),
        }
    }

    /// Recompute the derived ratios from the counters
    pub fn finalize(&mut self) {
        self.goals_per_match = Ratio::per(self.goals, self.matches, AVERAGE_DECIMALS);
        self.assists_per_match = Ratio::per(self.assists, self.matches, AVERAGE_DECIMALS);
        self.win_rate = Ratio::percent(self.won, self.matches, PERCENT_DECIMALS);
    }

    fn record(&mut self, entry: &MatchPlayerEntry, result: TeamResult) {
        self.matches = self.matches.saturating_add(1);
        self.goals = self.goals.saturating_add(entry.goals);
        self.assists = self.assists.saturating_add(entry.assists);
        tally_result(result, &mut self.won, &mut self.draw, &mut self.lost);
    }
}

impl GoalkeeperSeasonStat {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            matches: 0,
            goals_received: 0,
            clean_sheets: 0,
            won: 0,
            draw: 0,
            lost: 0,
            goals_received_per_match: Ratio::per(0, 0, AVERAGE_DECIMALS),
            clean_sheet_rate: Ratio::percent(0, 0, PERCENT_DECIMALS),
            win_rate: Ratio::percent(0, 0, PERCENT_DECIMALS),
        }
    }

    /// Recompute the derived ratios from the counters
    pub fn finalize(&mut self) {
        self.goals_received_per_match =
            Ratio::per(self.goals_received, self.matches, AVERAGE_DECIMALS);
        self.clean_sheet_rate = Ratio::percent(self.clean_sheets, self.matches, PERCENT_DECIMALS);
        self.win_rate = Ratio::percent(self.won, self.matches, PERCENT_DECIMALS);
    }

    // Keeper goals and assists are not counted
    fn record(&mut self, conceded: u32, result: TeamResult) {
        self.matches = self.matches.saturating_add(1);
        self.goals_received = self.goals_received.saturating_add(conceded);
        if conceded == 0 {
            self.clean_sheets = self.clean_sheets.saturating_add(1);
        }
        tally_result(result, &mut self.won, &mut self.draw, &mut self.lost);
    }
}

fn tally_result(result: TeamResult, won: &mut u32, draw: &mut u32, lost: &mut u32) {
    match result {
        TeamResult::Won => *won = won.saturating_add(1),
        TeamResult::Draw => *draw = draw.saturating_add(1),
        TeamResult::Lost => *lost = lost.saturating_add(1),
    }
}

/// Running per-id totals for one aggregation call
#[derive(Debug, Default)]
pub struct SeasonAccumulator {
    players: Vec<PlayerSeasonStat>,
    player_index: HashMap<String, usize>,
    goalkeepers: Vec<GoalkeeperSeasonStat>,
    goalkeeper_index: HashMap<String, usize>,
}

impl SeasonAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one match into the totals
    ///
    /// Team 1 entries come before team 2 entries; duplicated ids inside a
    /// roster are counted once per entry.
    pub fn add_match(&mut self, record: &MatchRecord) {
        for side in TeamSide::BOTH {
            let conceded = record.goals_against(side);
            let result = record.result_for(side);

            for entry in record.players(side) {
                if entry.is_gk {
                    self.goalkeeper_mut(entry).record(conceded, result);
                } else {
                    self.player_mut(entry).record(entry, result);
                }
            }
        }
    }

    fn player_mut(&mut self, entry: &MatchPlayerEntry) -> &mut PlayerSeasonStat {
        let index = match self.player_index.get(&entry.id) {
            Some(&index) => index,
            None => {
                self.players.push(PlayerSeasonStat::new(&entry.id, &entry.name));
                self.player_index.insert(entry.id.clone(), self.players.len() - 1);
                self.players.len() - 1
            }
        };
        &mut self.players[index]
    }

    fn goalkeeper_mut(&mut self, entry: &MatchPlayerEntry) -> &mut GoalkeeperSeasonStat {
        let index = match self.goalkeeper_index.get(&entry.id) {
            Some(&index) => index,
            None => {
                self.goalkeepers
                    .push(GoalkeeperSeasonStat::new(&entry.id, &entry.name));
                self.goalkeeper_index
                    .insert(entry.id.clone(), self.goalkeepers.len() - 1);
                self.goalkeepers.len() - 1
            }
        };
        &mut self.goalkeepers[index]
    }

    /// Compute derived ratios and hand back both record lists in insertion order
    pub fn finish(self) -> (Vec<PlayerSeasonStat>, Vec<GoalkeeperSeasonStat>) {
        let Self {
            mut players,
            mut goalkeepers,
            ..
        } = self;

        players.iter_mut().for_each(PlayerSeasonStat::finalize);
        goalkeepers
            .iter_mut()
            .for_each(GoalkeeperSeasonStat::finalize);

        debug!(
            "Accumulated {} field players and {} goalkeepers",
            players.len(),
            goalkeepers.len()
        );

        (players, goalkeepers)
    }
}

/// Accumulate a whole match list
pub fn accumulate(matches: &[MatchRecord]) -> (Vec<PlayerSeasonStat>, Vec<GoalkeeperSeasonStat>) {
    let mut accumulator = SeasonAccumulator::new();
    for record in matches {
        accumulator.add_match(record);
    }
    accumulator.finish()
}
