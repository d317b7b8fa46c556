//! Unit tests for batch submission scoring

use super::*;
use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_score_row_worked_example() {
    // Travis Head (28) + Pat cummins (35) = 63
    let values = base_value_table();
    let total = score_row(&["Travis Head", "Pat cummins"], &values);
    assert_eq!(total, 63.0);
}

#[test]
fn test_score_row_unknown_and_empty_cells() {
    let values = base_value_table();
    let total = score_row(&["Travis Head", "", "  ", "Nobody At All"], &values);
    assert_eq!(total, 28.0);
}

#[test]
fn test_score_row_trims_cells() {
    let values = base_value_table();
    assert_eq!(score_row(&["  Travis Head  "], &values), 28.0);
}

#[test]
fn test_score_submissions_basic() {
    let file = write_csv(
        "Team Name,Select Batsman (Any 1),Select Bowler (Any 1)\n\
         Alpha,Travis Head,Pat cummins\n\
         Beta,Phil Salt,\n",
    );

    let results = score_submissions(file.path(), &base_value_table(), BatchMode::Base).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].team, "Alpha");
    assert_eq!(results[0].total, 63.0);
    assert_eq!(results[1].team, "Beta");
    assert_eq!(results[1].total, 20.0);
}

#[test]
fn test_score_submissions_synthesizes_team_names() {
    let file = write_csv(
        "Team Name,Select Batsman (Any 1)\n\
         ,Travis Head\n\
         Named,Phil Salt\n",
    );

    let results = score_submissions(file.path(), &base_value_table(), BatchMode::Base).unwrap();
    assert_eq!(results[0].team, "Team_1");
    assert_eq!(results[1].team, "Named");
}

#[test]
fn test_unreadable_row_scores_zero_and_continues() {
    // Row 1 carries an invalid UTF-8 cell the reader rejects; it must
    // contribute 0 under a synthesized name without aborting the run
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Team Name,Select Batsman (Any 1)\n").unwrap();
    file.write_all(b"Alpha,\xff\xfe\n").unwrap();
    file.write_all(b"Beta,Phil Salt\n").unwrap();
    file.flush().unwrap();

    let results = score_submissions(file.path(), &base_value_table(), BatchMode::Base).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].team, "Team_1");
    assert_eq!(results[0].total, 0.0);
    assert_eq!(results[1].team, "Beta");
    assert_eq!(results[1].total, 20.0);
}

#[test]
fn test_score_submissions_recognizes_header_variants() {
    // Both spellings plus the pandas-style .1 duplicate suffix
    let file = write_csv(
        "Team Name,Select Batsmen(Any 1),Select Bowler(Any 1).1,Select All-rounder (any 1)\n\
         Alpha,Travis Head,Pat cummins,Axar Patel\n",
    );

    let results = score_submissions(file.path(), &base_value_table(), BatchMode::Base).unwrap();
    assert_eq!(results[0].total, 63.0 + 32.0);
}

#[test]
fn test_score_submissions_timed_metadata() {
    let file = write_csv(
        "Timestamp,Team Name,Team members Name (1 leader + 4 Members),Select Batsman (Any 1)\n\
         2026-03-01 10:15:00,Alpha,\"A, B, C, D, E\",Travis Head\n\
         ,Beta,,Phil Salt\n",
    );

    let results = score_submissions(file.path(), &timed_value_table(), BatchMode::Timed).unwrap();
    assert_eq!(results[0].submitted_at, Some(at(2026, 3, 1, 10, 15)));
    assert_eq!(results[0].members, "A, B, C, D, E");
    assert_eq!(results[0].total, 42.0);
    assert_eq!(results[1].submitted_at, None);
    assert_eq!(results[1].members, "Not specified");
}

#[test]
fn test_missing_file_is_fatal() {
    let path = std::path::Path::new("/nonexistent/submissions.csv");
    assert!(score_submissions(path, &base_value_table(), BatchMode::Base).is_err());
}

fn submission(team: &str, total: f64, submitted_at: Option<NaiveDateTime>) -> ScoredSubmission {
    ScoredSubmission {
        team: team.to_string(),
        total,
        timestamp: String::new(),
        submitted_at,
        members: String::new(),
    }
}

#[test]
fn test_rank_by_score_stable_on_ties() {
    let mut results = vec![
        submission("First", 50.0, None),
        submission("Second", 50.0, None),
        submission("Winner", 80.0, None),
    ];
    rank_by_score(&mut results);

    let order: Vec<&str> = results.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(order, vec!["Winner", "First", "Second"]);
}

#[test]
fn test_rank_by_score_then_time() {
    let mut results = vec![
        submission("Late", 50.0, Some(at(2026, 3, 1, 12, 0))),
        submission("Untimed", 50.0, None),
        submission("Early", 50.0, Some(at(2026, 3, 1, 9, 30))),
        submission("Top", 80.0, None),
    ];
    rank_by_score_then_time(&mut results);

    let order: Vec<&str> = results.iter().map(|r| r.team.as_str()).collect();
    // Equal totals: earlier submission first, missing timestamps last
    assert_eq!(order, vec!["Top", "Early", "Late", "Untimed"]);
}

#[test]
fn test_parse_timestamp_formats() {
    assert_eq!(
        parse_timestamp("2026-03-01 09:30:00"),
        Some(at(2026, 3, 1, 9, 30))
    );
    assert_eq!(
        parse_timestamp("2026/03/01 09:30:00"),
        Some(at(2026, 3, 1, 9, 30))
    );
    assert_eq!(
        parse_timestamp("03/01/2026 09:30:00"),
        Some(at(2026, 3, 1, 9, 30))
    );
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("next tuesday"), None);
}

#[test]
fn test_write_results_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("team_results.csv");

    let results = vec![submission("Alpha", 63.0, None), submission("Beta", 20.0, None)];
    write_results(&path, &results, BatchMode::Base).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Team_Name,Total_Score"));
    assert_eq!(lines.next(), Some("Alpha,63"));
    assert_eq!(lines.next(), Some("Beta,20"));
}

#[test]
fn test_load_value_table_round_trip() {
    let file = write_csv("Name,Points\nTravis Head,28\nPat cummins,35\n");
    let table = load_value_table(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table["Travis Head"], 28);
    assert_eq!(table["Pat cummins"], 35);
}

#[test]
fn test_load_value_table_bad_points_is_error() {
    let file = write_csv("Name,Points\nTravis Head,lots\n");
    let result = load_value_table(file.path());
    assert!(matches!(
        result,
        Err(ScorerError::InvalidPointValue { .. })
    ));
}

#[test]
fn test_builtin_tables_cover_same_squad_size() {
    assert_eq!(base_value_table().len(), 25);
    assert_eq!(timed_value_table().len(), 25);
}
