use mejenga_stats::commands::{
    execute_season, execute_votes, validate_args, validate_history_args, HistoryArgs,
    SeasonArgs, VotesArgs,
};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_json(value: serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", value).unwrap();
    file
}

fn match_export() -> NamedTempFile {
    write_json(json!([
        {
            "date": "2023-11-04T20:00:00Z",
            "goalsTeam1": 1,
            "goalsTeam2": 0,
            "players1": [{ "id": "p1", "name": "Álvaro", "goals": 1 }],
            "players2": [{ "id": "p2", "name": "Celso" }]
        },
        {
            "date": "2024-01-13T20:00:00Z",
            "goalsTeam1": 2,
            "goalsTeam2": 3,
            "players1": [{ "id": "p1", "name": "Álvaro", "goals": 2 }],
            "players2": [{ "id": "p2", "name": "Celso", "goals": 3 }]
        }
    ]))
}

#[test]
fn test_validate_args_valid() {
    let args = SeasonArgs {
        input: PathBuf::from("matches.json"),
        year: Some(2024),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_input() {
    let args = SeasonArgs {
        input: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_year_too_large() {
    let args = SeasonArgs {
        year: Some(3000),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_history_args_zero_limit() {
    let args = HistoryArgs {
        limit: 0,
        ..Default::default()
    };

    assert!(validate_history_args(&args).is_err());
}

#[test]
fn test_execute_season_writes_report() {
    let input = match_export();
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("season-2024.json");

    let args = SeasonArgs {
        input: input.path().to_path_buf(),
        year: Some(2024),
        output: Some(output.clone()),
        config: None,
        print_summary: false,
    };

    let report = execute_season(args).unwrap().unwrap();

    assert!(output.exists());
    assert_eq!(report.stats.total_matches, 1);
    assert_eq!(report.stats.top_scorer.unwrap().id, "p2");
}

#[test]
fn test_execute_season_without_data() {
    let input = match_export();

    let args = SeasonArgs {
        input: input.path().to_path_buf(),
        year: Some(2020),
        output: None,
        config: None,
        print_summary: true,
    };

    assert!(execute_season(args).unwrap().is_none());
}

#[test]
fn test_execute_season_with_config() {
    let input = match_export();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, "[aggregation]\nmin_matches_for_ratio = 2\n").unwrap();

    let args = SeasonArgs {
        input: input.path().to_path_buf(),
        year: None,
        output: None,
        config: Some(config.path().to_path_buf()),
        print_summary: false,
    };

    let report = execute_season(args).unwrap().unwrap();
    let best = report.stats.best_goals_per_match.unwrap();
    assert_eq!(best.id, "p1");
    assert_eq!(best.goals_per_match.display, "1.50");
}

#[test]
fn test_execute_season_bad_config() {
    let input = match_export();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, "[aggregation]\ntop_list_size = 0\n").unwrap();

    let args = SeasonArgs {
        input: input.path().to_path_buf(),
        year: None,
        output: None,
        config: Some(config.path().to_path_buf()),
        print_summary: false,
    };

    assert!(execute_season(args).is_err());
}

#[test]
fn test_execute_votes() {
    let input = write_json(json!([
        { "voterId": "u1", "candidateId": "p1", "candidateName": "Álvaro", "year": 2024 }
    ]));

    let tallies = execute_votes(VotesArgs {
        input: input.path().to_path_buf(),
        year: 2024,
    })
    .unwrap();

    assert_eq!(tallies.len(), 1);
    assert_eq!(tallies[0].votes, 1);
}
