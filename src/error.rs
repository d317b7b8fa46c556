//! Error types for the IPL team scorer CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScorerError>;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid role: {role}")]
    InvalidRole { role: String },

    #[error("Team already exists: {name}")]
    TeamExists { name: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Player not found in catalog: {name}")]
    PlayerNotFound { name: String },

    #[error("Player {player} is already in team {team}")]
    DuplicateMember { team: String, player: String },

    #[error("Player {player} is not in team {team}")]
    MemberNotFound { team: String, player: String },

    #[error("Invalid point value for {name}: {value}")]
    InvalidPointValue { name: String, value: String },

    #[error("Team store error: {message}")]
    Store { message: String },
}
