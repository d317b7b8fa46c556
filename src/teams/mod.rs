//! Team aggregation: score a member list against the catalog and derive
//! the ranked leaderboard and per-team detail views.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::output::{LeaderboardRow, PlayerScoreRow, TeamDetail};
use crate::storage::TeamStore;


/// Aggregated score for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamScore {
    pub total: f64,
    pub per_player: HashMap<String, f64>,
}

/// Sum the scores of every resolvable member.
///
/// Unknown names are skipped with a stderr diagnostic and contribute
/// nothing; they never abort the run. The sum is order-independent and
/// deterministic for a fixed catalog and member list.
pub fn aggregate(members: &[String], catalog: &Catalog) -> TeamScore {
    let mut total = 0.0;
    let mut per_player = HashMap::new();

    for name in members {
        match catalog.get(name) {
            Some(record) => {
                let score = record.score();
                total += score;
                per_player.insert(name.clone(), score);
            }
            None => {
                eprintln!("Player '{}' not found in catalog, skipping", name);
            }
        }
    }

    TeamScore { total, per_player }
}

/// Rank every stored team by total score descending.
///
/// The sort is stable, so equal totals keep the store's iteration order.
/// Empty teams are included with a total of 0.0 so the leaderboard and
/// the team list agree about which teams exist.
pub fn leaderboard(store: &TeamStore, catalog: &Catalog) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = store
        .teams()
        .map(|(name, members)| {
            let score = aggregate(members, catalog);
            LeaderboardRow {
                rank: 0,
                team: name.clone(),
                players: members.len(),
                score: score.total,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Per-player breakdown for one team, sorted by score descending.
///
/// Members missing from the catalog are excluded from the breakdown
/// (the aggregate diagnostic already names them).
pub fn team_detail(name: &str, members: &[String], catalog: &Catalog) -> TeamDetail {
    let score = aggregate(members, catalog);

    let mut players: Vec<PlayerScoreRow> = members
        .iter()
        .filter_map(|member| {
            let record = catalog.get(member)?;
            Some(PlayerScoreRow {
                player: member.clone(),
                role: record.role,
                score: score.per_player.get(member).copied().unwrap_or(0.0),
            })
        })
        .collect();
    players.sort_by(|a, b| b.score.total_cmp(&a.score));

    TeamDetail {
        team: name.to_string(),
        total: score.total,
        players,
    }
}
