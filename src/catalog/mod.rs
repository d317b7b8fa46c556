//! Player catalog: loads the three role-partitioned stat CSVs and indexes
//! every row by player name.
//!
//! Each CSV row is `Name` followed by positional stat columns (one block of
//! columns per season, stride fixed by the role). Cells that fail to parse
//! as numbers are coerced to 0 at load time, never propagated as unknown.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::cli::types::Role;
use crate::error::Result;
use crate::scoring::player_score;


/// One player's statistics as loaded from a partition CSV.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub role: Role,
    pub stats: Vec<f64>,
}

impl PlayerRecord {
    /// Score under the role-specific formula. Computed on demand, never
    /// cached, so it always reflects the loaded statistics.
    pub fn score(&self) -> f64 {
        player_score(self.role, &self.stats)
    }
}

/// Name-indexed player records from all three partitions.
#[derive(Debug, Default)]
pub struct Catalog {
    players: HashMap<String, PlayerRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the displaced record when the name was
    /// already present. Duplicates across partitions are not an error:
    /// last-loaded wins, and the caller may inspect the returned record
    /// to enforce stricter policies.
    pub fn insert(&mut self, record: PlayerRecord) -> Option<PlayerRecord> {
        self.players.insert(record.name.clone(), record)
    }

    /// Exact-name lookup. Unknown names are `None`, never a default score.
    pub fn get(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.get(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Load one partition CSV, tagging every row with `role`.
    pub fn load_partition(&mut self, path: &Path, role: Role) -> Result<usize> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let mut loaded = 0;
        for record in reader.records() {
            let record = record?;
            let Some(name) = record.get(0).map(str::trim).filter(|n| !n.is_empty()) else {
                continue;
            };
            let stats = record
                .iter()
                .skip(1)
                .map(parse_stat_cell)
                .collect::<Vec<f64>>();
            self.insert(PlayerRecord {
                name: name.to_string(),
                role,
                stats,
            });
            loaded += 1;
        }
        Ok(loaded)
    }
}

/// Coerce a stat cell to a number; blank or unparseable cells become 0.
fn parse_stat_cell(cell: &str) -> f64 {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

/// Build the full catalog from the batter, bowler, and all-rounder CSVs.
///
/// A missing or unreadable file is fatal for the whole run.
pub fn load_catalog(batters: &Path, bowlers: &Path, allrounders: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    catalog.load_partition(batters, Role::Batter)?;
    catalog.load_partition(bowlers, Role::Bowler)?;
    catalog.load_partition(allrounders, Role::AllRounder)?;
    Ok(catalog)
}
