//! Score formula library: pure functions from a player's positional stat
//! sequence to a fantasy score, specialized by role.
//!
//! Stat columns are positional, not name-driven: the same categories repeat
//! once per season block, so the formulas consume the sequence in fixed
//! strides (3 fields per season for bowlers, 6 for all-rounders). Reordering
//! columns within a block silently corrupts scores; each block is therefore
//! modeled as a struct so the stride is explicit and testable.

use crate::cli::types::Role;


/// One season of bowling statistics (stride 3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BowlingSeason {
    pub wickets: f64,
    pub economy: f64,
    pub bowling_average: f64,
}

impl BowlingSeason {
    /// `wickets * 25 + 169 / economy + bowling_average * 2.5`.
    ///
    /// An economy of 0 contributes nothing rather than dividing by zero.
    pub fn score(&self) -> f64 {
        let mut score = self.wickets * 25.0 + self.bowling_average * 2.5;
        if self.economy != 0.0 {
            score += 169.0 / self.economy;
        }
        score
    }
}

/// One season of all-rounder statistics (stride 6): a batting block
/// followed by a bowling block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllRoundSeason {
    pub runs: f64,
    pub strike_rate: f64,
    pub batting_average: f64,
    pub bowling: BowlingSeason,
}

impl AllRoundSeason {
    pub fn score(&self) -> f64 {
        self.runs + self.strike_rate + self.batting_average + self.bowling.score()
    }
}

/// NaN fields count as 0 in every formula. The catalog already coerces
/// unparseable cells at load time; this keeps the guarantee when scoring
/// stat sequences from other sources.
fn zero_if_nan(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Split a stat sequence into complete bowling seasons.
///
/// Trailing fields that do not fill a whole triple are dropped.
pub fn bowling_seasons(stats: &[f64]) -> Vec<BowlingSeason> {
    stats
        .chunks_exact(3)
        .map(|c| BowlingSeason {
            wickets: zero_if_nan(c[0]),
            economy: zero_if_nan(c[1]),
            bowling_average: zero_if_nan(c[2]),
        })
        .collect()
}

/// Split a stat sequence into complete all-rounder seasons.
pub fn allround_seasons(stats: &[f64]) -> Vec<AllRoundSeason> {
    stats
        .chunks_exact(6)
        .map(|c| AllRoundSeason {
            runs: zero_if_nan(c[0]),
            strike_rate: zero_if_nan(c[1]),
            batting_average: zero_if_nan(c[2]),
            bowling: BowlingSeason {
                wickets: zero_if_nan(c[3]),
                economy: zero_if_nan(c[4]),
                bowling_average: zero_if_nan(c[5]),
            },
        })
        .collect()
}

/// Batter score: the plain sum of every stat field, all seasons weighted
/// uniformly.
pub fn batter_score(stats: &[f64]) -> f64 {
    stats.iter().copied().map(zero_if_nan).sum()
}

/// Bowler score: the bowling formula applied per season triple, summed.
pub fn bowler_score(stats: &[f64]) -> f64 {
    bowling_seasons(stats).iter().map(BowlingSeason::score).sum()
}

/// All-rounder score: batting plus bowling sub-scores per season sextuple.
///
/// Requires at least two full seasons (12 fields); anything shorter scores
/// exactly 0 with no partial credit.
pub fn allrounder_score(stats: &[f64]) -> f64 {
    if stats.len() < 12 {
        return 0.0;
    }
    allround_seasons(stats).iter().map(AllRoundSeason::score).sum()
}

/// Dispatch to the role-specific formula.
pub fn player_score(role: Role, stats: &[f64]) -> f64 {
    match role {
        Role::Batter => batter_score(stats),
        Role::Bowler => bowler_score(stats),
        Role::AllRounder => allrounder_score(stats),
    }
}
