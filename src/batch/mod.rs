//! Batch scoring of team-submission CSVs against a fixed point-value table.
//!
//! Each submission row carries a team name, optional metadata, and one or
//! more role-slot selection cells. A selected player's contribution is a
//! constant from the value table, with no role formulas or statistics
//! involved. This is a stateless fold over rows: nothing persists between
//! runs and the only output is the ranked result set.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{Result, ScorerError};

#[cfg(test)]
mod tests;

mod values;

pub use values::{base_value_table, timed_value_table};

/// Explicit name -> points lookup, passed into every scoring call so that
/// multiple scoring regimes can coexist.
pub type ValueTable = HashMap<String, i64>;

/// Slot column labels recognized in submission headers. Spreadsheet exports
/// are inconsistent about spacing and pluralization, and duplicated headers
/// pick up a `.1` suffix, so every observed variant is matched.
pub const SLOT_COLUMNS: &[&str] = &[
    "Select Batsmen(Any 1)",
    "Select Batsman (Any 1)",
    "Select Batsman (Any 1).1",
    "Select Bowler(Any 1)",
    "Select Bowler (Any 1)",
    "Select Bowler(Any 1).1",
    "Select Bowler (Any 1).1",
    "Select All-rounder (any 1)",
];

const TEAM_NAME_COLUMN: &str = "Team Name";
const TIMESTAMP_COLUMN: &str = "Timestamp";
const MEMBERS_COLUMN: &str = "Team members Name (1 leader + 4 Members)";

/// One scored submission row.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredSubmission {
    pub team: String,
    pub total: f64,
    /// Raw timestamp cell, kept verbatim for output.
    pub timestamp: String,
    /// Parsed timestamp used for tie-breaking; `None` when missing or in
    /// an unrecognized format.
    #[serde(skip)]
    pub submitted_at: Option<NaiveDateTime>,
    /// Free-text member list from the submission form (timed variant).
    pub members: String,
}

/// Which submission layout to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Team name + slot selections only; ties keep input order.
    Base,
    /// Adds timestamp and member-list columns; ties rank earlier
    /// submissions first.
    Timed,
}

/// Score one row's slot selections against the value table.
///
/// `slots` holds the cell values of the recognized slot columns. Empty
/// cells contribute nothing; known names add their table value; unknown
/// names add 0 with a console diagnostic, matching the permissive
/// skip-and-continue policy.
pub fn score_row(slots: &[&str], values: &ValueTable) -> f64 {
    let mut total = 0.0;
    for cell in slots {
        let player = cell.trim();
        if player.is_empty() {
            continue;
        }
        match values.get(player) {
            Some(points) => {
                println!("Found {}: +{} points", player, points);
                total += *points as f64;
            }
            None => {
                println!("Player '{}' not found in value table", player);
            }
        }
    }
    total
}

/// Header positions of every recognized slot column, in label order.
fn slot_indices(headers: &csv::StringRecord) -> Vec<usize> {
    let mut indices = Vec::new();
    for label in SLOT_COLUMNS {
        for (i, header) in headers.iter().enumerate() {
            if header.trim() == *label {
                indices.push(i);
            }
        }
    }
    indices
}

fn column_index(headers: &csv::StringRecord, label: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == label)
}

/// Timestamp formats seen in form exports, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Score every row of a submission CSV.
///
/// A missing or unreadable file is fatal. A row that fails to read is not:
/// it contributes 0 under a synthesized `Team_{n}` name (1-based row
/// number) and processing continues.
pub fn score_submissions(
    path: &Path,
    values: &ValueTable,
    mode: BatchMode,
) -> Result<Vec<ScoredSubmission>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let slots = slot_indices(&headers);
    let team_idx = column_index(&headers, TEAM_NAME_COLUMN);
    let timestamp_idx = column_index(&headers, TIMESTAMP_COLUMN);
    let members_idx = column_index(&headers, MEMBERS_COLUMN);

    let mut results = Vec::new();
    for (row_number, record) in reader.records().enumerate() {
        let row_number = row_number + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                println!("Error processing row {}: {}", row_number, e);
                results.push(ScoredSubmission {
                    team: format!("Team_{}", row_number),
                    total: 0.0,
                    timestamp: String::new(),
                    submitted_at: None,
                    members: "Not specified".to_string(),
                });
                continue;
            }
        };

        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").trim();

        let team = match cell(team_idx) {
            "" => format!("Team_{}", row_number),
            name => name.to_string(),
        };

        let slot_cells: Vec<&str> = slots.iter().filter_map(|&i| record.get(i)).collect();
        let total = score_row(&slot_cells, values);

        let (timestamp, submitted_at, members) = match mode {
            BatchMode::Base => (String::new(), None, String::new()),
            BatchMode::Timed => {
                let raw = cell(timestamp_idx).to_string();
                let parsed = parse_timestamp(&raw);
                let members = match cell(members_idx) {
                    "" => "Not specified".to_string(),
                    m => m.to_string(),
                };
                (raw, parsed, members)
            }
        };

        println!("{}: Total Score = {}", team, total);
        results.push(ScoredSubmission {
            team,
            total,
            timestamp,
            submitted_at,
            members,
        });
    }
    Ok(results)
}

/// Base ranking: total descending; the sort is stable, so equal totals
/// keep their input order.
pub fn rank_by_score(results: &mut [ScoredSubmission]) {
    results.sort_by(|a, b| b.total.total_cmp(&a.total));
}

/// Timed ranking: total descending, then submission time ascending.
/// Rows without a parseable timestamp sort after timed rows at the same
/// total.
pub fn rank_by_score_then_time(results: &mut [ScoredSubmission]) {
    results.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| match (a.submitted_at, b.submitted_at) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });
}

/// Write ranked results back out as CSV.
pub fn write_results(path: &Path, results: &[ScoredSubmission], mode: BatchMode) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    match mode {
        BatchMode::Base => {
            writer.write_record(["Team_Name", "Total_Score"])?;
            for row in results {
                let total = row.total.to_string();
                writer.write_record([row.team.as_str(), total.as_str()])?;
            }
        }
        BatchMode::Timed => {
            writer.write_record(["Team_Name", "Total_Score", "Timestamp", "Team_Members"])?;
            for row in results {
                let total = row.total.to_string();
                writer.write_record([
                    row.team.as_str(),
                    total.as_str(),
                    row.timestamp.as_str(),
                    row.members.as_str(),
                ])?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Load a `name,points` CSV into a value table.
pub fn load_value_table(path: &Path) -> Result<ValueTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut table = ValueTable::new();
    for record in reader.records() {
        let record = record?;
        let Some(name) = record.get(0).map(str::trim).filter(|n| !n.is_empty()) else {
            continue;
        };
        let raw = record.get(1).map(str::trim).unwrap_or("");
        let points = raw
            .parse::<i64>()
            .map_err(|_| ScorerError::InvalidPointValue {
                name: name.to_string(),
                value: raw.to_string(),
            })?;
        table.insert(name.to_string(), points);
    }
    Ok(table)
}
