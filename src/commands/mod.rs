//! Command implementations for the IPL team scorer CLI

pub mod batch_score;
pub mod common;
pub mod leaderboard;
pub mod team_detail;
pub mod team_ops;
