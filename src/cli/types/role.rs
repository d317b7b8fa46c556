//! Cricket player role types and utilities.

use crate::error::ScorerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy cricket player roles.
///
/// The role determines which scoring formula applies to a player's
/// statistics and which positional stride the stat columns follow.
///
/// # Examples
///
/// ```rust
/// use ipl_scorer::Role;
///
/// let bowler: Role = "Bowler".parse().unwrap();
/// assert_eq!(bowler.to_string(), "Bowler");
/// assert_eq!(bowler.season_stride(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batter,
    Bowler,
    AllRounder,
}

impl Role {
    /// Number of consecutive stat fields that make up one season for this
    /// role, or `None` for batters (all fields are summed uniformly).
    pub fn season_stride(&self) -> Option<usize> {
        match self {
            Role::Batter => None,
            Role::Bowler => Some(3),
            Role::AllRounder => Some(6),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Batter => "Batter",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-rounder",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = ScorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "batter" | "batsman" | "bat" => Ok(Role::Batter),
            "bowler" | "bowl" => Ok(Role::Bowler),
            "all-rounder" | "allrounder" | "all rounder" | "ar" => Ok(Role::AllRounder),
            _ => Err(ScorerError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}
