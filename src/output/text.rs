//! Terminal rendering for season data.
//!
//! Plain-text tables with coloured headings; used by the `--summary`,
//! `seasons`, `history` and `votes` commands.

use crate::aggregator::{
    GoalkeeperSeasonStat, MatchSummary, PlayerSeasonStat, Scorer, SeasonOverview, SeasonStats,
};
use crate::parser::MatchOutcome;
use crate::voting::VoteTally;
use colored::*;

const RULE: &str = "---------------------------------------------------";

/// Render the season page: totals, superlatives and top tables
pub fn render_season_summary(stats: &SeasonStats, year: Option<i32>) -> String {
    let mut out = String::new();

    out.push_str(&render_header(stats, year));
    out.push_str(&render_player_superlatives(stats));
    out.push_str(&render_keeper_superlatives(stats));
    out.push_str(&render_player_table("Top Scorers", &stats.top_scorers_list, |p| p.goals));
    out.push_str(&render_player_table("Top Assisters", &stats.top_assisters_list, |p| {
        p.assists
    }));
    out.push_str(&render_player_table("Most Wins", &stats.most_wins, |p| p.won));

    out
}

fn render_header(stats: &SeasonStats, year: Option<i32>) -> String {
    let title = match year {
        Some(year) => format!("Season {}", year),
        None => "All Seasons".to_string(),
    };

    let mut out = String::new();
    out.push_str("\n⚽ ");
    out.push_str(&title.bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Matches: {}\n", stats.total_matches));
    out.push_str(&format!("Goals:   {}\n", stats.total_goals));
    out.push_str(&format!(
        "Players: {} | Goalkeepers: {}\n",
        stats.all_player_stats.len(),
        stats.all_gk_stats.len()
    ));
    out.push_str(RULE);
    out.push_str("\n\n");
    out
}

fn render_player_superlatives(stats: &SeasonStats) -> String {
    let mut out = String::new();
    out.push_str(&"Players\n".bold().to_string());

    out.push_str(&pick_line("Top scorer", &stats.top_scorer, |p| {
        format!("{} goals", p.goals)
    }));
    out.push_str(&pick_line("Top assister", &stats.top_assister, |p| {
        format!("{} assists", p.assists)
    }));
    out.push_str(&pick_line("Most games", &stats.most_games_played, |p| {
        format!("{} matches", p.matches)
    }));
    out.push_str(&pick_line("Fewest games", &stats.least_games_played, |p| {
        format!("{} matches", p.matches)
    }));
    out.push_str(&pick_line("Best goals/match", &stats.best_goals_per_match, |p| {
        format!("{} per match", p.goals_per_match)
    }));
    out.push_str(&pick_line("Best assists/match", &stats.best_assists_per_match, |p| {
        format!("{} per match", p.assists_per_match)
    }));
    out.push_str(&pick_line("Best win rate", &stats.best_win_rate, |p| {
        format!("{}%", p.win_rate)
    }));

    out.push('\n');
    out
}

fn render_keeper_superlatives(stats: &SeasonStats) -> String {
    let mut out = String::new();
    out.push_str(&"Goalkeepers\n".bold().to_string());

    out.push_str(&keeper_line("Most goals received", &stats.gk_most_goals_received, |k| {
        format!("{} received", k.goals_received)
    }));
    out.push_str(&keeper_line("Fewest goals received", &stats.gk_least_goals_received, |k| {
        format!("{} received", k.goals_received)
    }));
    out.push_str(&keeper_line("Most clean sheets", &stats.gk_most_clean_sheets, |k| {
        format!("{} clean sheets", k.clean_sheets)
    }));
    out.push_str(&keeper_line("Best average", &stats.gk_best_average, |k| {
        format!("{} received per match", k.goals_received_per_match)
    }));
    out.push_str(&keeper_line(
        "Best clean sheet rate",
        &stats.gk_best_clean_sheet_rate,
        |k| format!("{}%", k.clean_sheet_rate),
    ));

    out.push('\n');
    out
}

fn pick_line(
    label: &str,
    pick: &Option<PlayerSeasonStat>,
    detail: impl Fn(&PlayerSeasonStat) -> String,
) -> String {
    match pick {
        Some(player) => format!("  {:<22} {} ({})\n", label, player.name, detail(player)),
        None => format!("  {:<22} {}\n", label, "-".dimmed()),
    }
}

fn keeper_line(
    label: &str,
    pick: &Option<GoalkeeperSeasonStat>,
    detail: impl Fn(&GoalkeeperSeasonStat) -> String,
) -> String {
    match pick {
        Some(keeper) => format!("  {:<22} {} ({})\n", label, keeper.name, detail(keeper)),
        None => format!("  {:<22} {}\n", label, "-".dimmed()),
    }
}

fn render_player_table(
    title: &str,
    rows: &[PlayerSeasonStat],
    value: impl Fn(&PlayerSeasonStat) -> u32,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", title.bold()));

    if rows.is_empty() {
        out.push_str(&format!("  {}\n\n", "no entries".dimmed()));
        return out;
    }

    for (rank, player) in rows.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<24} {:>3}  ({} matches)\n",
            rank + 1,
            player.name,
            value(player),
            player.matches
        ));
    }

    out.push('\n');
    out
}

/// Render per-year totals
pub fn render_season_overviews(overviews: &[SeasonOverview]) -> String {
    let mut out = String::new();
    out.push_str(&"\n📅 Seasons\n".bold().to_string());
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "  {:<6} {:>8} {:>8} {:>12}\n",
        "Year", "Matches", "Goals", "Goals/match"
    ));

    for overview in overviews {
        out.push_str(&format!(
            "  {:<6} {:>8} {:>8} {:>12}\n",
            overview.year,
            overview.total_matches,
            overview.total_goals,
            overview.average_goals_per_match
        ));
    }

    out
}

/// Render the match history, at most `limit` rows
pub fn render_history(history: &[MatchSummary], limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&"\n📋 Match History\n".bold().to_string());
    out.push_str(RULE);
    out.push('\n');

    for summary in history.iter().take(limit) {
        let marker = match summary.outcome {
            MatchOutcome::Team1Win => "1".green(),
            MatchOutcome::Team2Win => "2".blue(),
            MatchOutcome::Draw => "X".yellow(),
        };

        out.push_str(&format!(
            "  {}  {:>7}  [{}]\n",
            summary.date.format("%Y-%m-%d"),
            summary.score_line(),
            marker
        ));

        if !summary.scorers_team1.is_empty() {
            out.push_str(&format!("      Team 1: {}\n", format_scorers(&summary.scorers_team1)));
        }
        if !summary.scorers_team2.is_empty() {
            out.push_str(&format!("      Team 2: {}\n", format_scorers(&summary.scorers_team2)));
        }
    }

    if history.len() > limit {
        out.push_str(&format!(
            "\n   (Showing {} of {} matches)\n",
            limit,
            history.len()
        ));
    }

    out
}

fn format_scorers(scorers: &[Scorer]) -> String {
    scorers
        .iter()
        .map(|s| {
            if s.goals > 1 {
                format!("{} x{}", s.name, s.goals)
            } else {
                s.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the Balón de Oro standings
pub fn render_vote_tally(tallies: &[VoteTally], year: i32) -> String {
    let mut out = String::new();
    out.push_str("\n🏆 ");
    out.push_str(&format!("Balón de Oro {}", year).bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');

    if tallies.is_empty() {
        out.push_str(&format!("  {}\n", "no votes cast".dimmed()));
        return out;
    }

    for (rank, tally) in tallies.iter().enumerate() {
        let line = format!(
            "  {}. {:<24} {:>3} votes ({}%)\n",
            rank + 1,
            tally.candidate_name,
            tally.votes,
            tally.percentage
        );
        if rank == 0 {
            out.push_str(&line.yellow().bold().to_string());
        } else {
            out.push_str(&line);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{compute_season_stats, match_history, season_overviews};
    use crate::parser::parse_matches;
    use crate::voting::{tally_votes, Vote};
    use serde_json::json;

    fn sample_matches() -> Vec<crate::parser::MatchRecord> {
        parse_matches(&json!([
            {
                "date": "2024-02-10T20:00:00Z",
                "goalsTeam1": 2,
                "goalsTeam2": 0,
                "players1": [
                    { "id": "p1", "name": "Joel", "goals": 2 },
                    { "id": "g1", "name": "Keylor", "isGK": true }
                ],
                "players2": [{ "id": "p2", "name": "Celso" }]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_season_summary_lists_picks() {
        let stats = compute_season_stats(&sample_matches()).unwrap();
        let text = render_season_summary(&stats, Some(2024));

        assert!(text.contains("Season 2024"));
        assert!(text.contains("Joel (2 goals)"));
        assert!(text.contains("Keylor (1 clean sheets)"));
        assert!(text.contains("1. Joel"));
    }

    #[test]
    fn test_history_shows_scorers() {
        let text = render_history(&match_history(&sample_matches()), 10);
        assert!(text.contains("2024-02-10"));
        assert!(text.contains("Team 1: Joel x2"));
        assert!(!text.contains("Team 2:"));
    }

    #[test]
    fn test_history_limit_note() {
        let text = render_history(&match_history(&sample_matches()), 0);
        assert!(text.contains("Showing 0 of 1 matches"));
    }

    #[test]
    fn test_overviews_table() {
        let text = render_season_overviews(&season_overviews(&sample_matches()));
        assert!(text.contains("2024"));
        assert!(text.contains("2.00"));
    }

    #[test]
    fn test_vote_tally() {
        let votes = vec![Vote {
            voter_id: "u1".to_string(),
            candidate_id: "p1".to_string(),
            candidate_name: "Joel".to_string(),
            year: 2024,
        }];
        let text = render_vote_tally(&tally_votes(&votes, 2024), 2024);
        assert!(text.contains("Joel"));
        assert!(text.contains("100.0%"));

        assert!(render_vote_tally(&[], 2024).contains("no votes cast"));
    }
}
