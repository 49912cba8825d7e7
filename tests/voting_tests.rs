use mejenga_stats::voting::{load_votes, tally_votes, winner};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_tally_from_file() {
    let votes = json!([
        { "voterId": "u1", "candidateId": "p1", "candidateName": "Bryan", "year": 2024 },
        { "voterId": "u2", "candidateId": "p2", "candidateName": "Keylor", "year": 2024 },
        { "voterId": "u3", "candidateId": "p2", "candidateName": "Keylor", "year": 2024 },
        { "voterId": "u1", "candidateId": "p2", "candidateName": "Keylor", "year": 2023 },
        { "voterId": "u4", "candidateId": "p1", "candidateName": "Bryan", "year": 2024 },
        { "voterId": "u4", "candidateId": "p3", "candidateName": "Celso", "year": 2024 }
    ]);

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", votes).unwrap();

    let votes = load_votes(file.path()).unwrap();
    let tallies = tally_votes(&votes, 2024);

    let rows: Vec<(&str, u32)> = tallies
        .iter()
        .map(|t| (t.candidate_id.as_str(), t.votes))
        .collect();
    assert_eq!(rows, vec![("p2", 2), ("p1", 1), ("p3", 1)]);

    let leader = winner(&tallies).unwrap();
    assert_eq!(leader.candidate_name, "Keylor");
    assert_eq!(leader.percentage.display, "50.0");
}

#[test]
fn test_load_votes_rejects_object() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();
    assert!(load_votes(file.path()).is_err());
}
