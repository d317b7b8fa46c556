//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::cli::types::Role;

/// One leaderboard entry.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    /// 1-based rank after sorting by score descending.
    pub rank: usize,
    pub team: String,
    /// Member count, resolvable or not.
    pub players: usize,
    pub score: f64,
}

/// One line of a team's per-player breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerScoreRow {
    pub player: String,
    pub role: Role,
    pub score: f64,
}

/// Full detail payload for one team.
///
/// This structure is designed for easy JSON serialization.
#[derive(Debug, Clone, Serialize)]
pub struct TeamDetail {
    pub team: String,
    pub total: f64,
    pub players: Vec<PlayerScoreRow>,
}
