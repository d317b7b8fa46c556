//! IPL Fantasy Team Scorer Library
//!
//! A Rust library and CLI for scoring fantasy cricket teams from tabular
//! input, providing role-based score formulas, a player catalog, team
//! aggregation with a persisted team store, and batch scoring of
//! submission spreadsheets against fixed point-value tables.
//!
//! ## Features
//!
//! - **Score Formulas**: role-specific formulas over positional stat
//!   sequences (batters sum everything; bowlers and all-rounders consume
//!   fixed-stride season blocks)
//! - **Player Catalog**: three role-partitioned CSVs indexed by name
//! - **Team Store**: JSON-persisted teams with add/remove member ops
//! - **Leaderboard**: teams ranked by recomputed total score
//! - **Batch Mode**: fixed value-table scoring of submission CSVs, with
//!   an optional submission-time tie-break
//!
//! ## Quick Start
//!
//! ```rust
//! use ipl_scorer::scoring::{bowler_score, player_score};
//! use ipl_scorer::Role;
//!
//! // One season triple: wickets, economy, bowling average
//! let score = bowler_score(&[3.0, 0.0, 20.0]);
//! assert_eq!(score, 125.0);
//! assert_eq!(player_score(Role::Bowler, &[3.0, 0.0, 20.0]), score);
//! ```

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod scoring;
pub mod storage;
pub mod teams;

// Re-export commonly used types
pub use cli::types::Role;
pub use error::{Result, ScorerError};
