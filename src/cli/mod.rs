//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Catalog CSV locations shared by catalog-backed commands.
///
/// Defaults match the auction export filenames so the tool works from the
/// directory the spreadsheets were downloaded into.
#[derive(Debug, Args)]
pub struct CatalogPaths {
    /// Batter statistics CSV.
    #[clap(long, default_value = "IPL_Auction_2026 - Batters.csv")]
    pub batters: PathBuf,

    /// Bowler statistics CSV.
    #[clap(long, default_value = "IPL_Auction_2026 - Bowlers.csv")]
    pub bowlers: PathBuf,

    /// All-rounder statistics CSV.
    #[clap(long, default_value = "IPL_Auction_2026 - All-rounders.csv")]
    pub allrounders: PathBuf,
}

#[derive(Debug, Parser)]
#[clap(name = "ipl-scorer", about = "IPL fantasy team scoring CLI")]
pub struct IplScorer {
    /// Team store JSON file (default: platform data dir).
    #[clap(long, global = true)]
    pub store: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage stored teams.
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Rank all stored teams by total score.
    Leaderboard {
        #[clap(flatten)]
        catalog: CatalogPaths,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Per-player score breakdown for one team.
    Detail {
        /// Team name.
        name: String,

        #[clap(flatten)]
        catalog: CatalogPaths,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Score a team-submission CSV against a fixed point-value table.
    ///
    /// Writes ranked results back out as CSV and prints a ranked report.
    Batch {
        /// Submission CSV to score.
        input: PathBuf,

        /// Load the value table from a `name,points` CSV instead of the
        /// built-in table.
        #[clap(long)]
        values: Option<PathBuf>,

        /// Use the timed variant: read submission timestamps and break
        /// score ties by earliest submission.
        #[clap(long)]
        timed: bool,

        /// Results CSV path (default: team_results.csv, or
        /// team_results_ranked.csv with --timed).
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// List stored teams with member counts.
    List,

    /// Create a new empty team.
    Create {
        /// Team name.
        name: String,
    },

    /// Delete a team.
    Delete {
        /// Team name.
        name: String,
    },

    /// Add a catalog player to a team.
    Add {
        /// Team name.
        team: String,

        /// Player name, exactly as it appears in the catalog.
        player: String,

        #[clap(flatten)]
        catalog: CatalogPaths,
    },

    /// Remove a player from a team.
    Remove {
        /// Team name.
        team: String,

        /// Player name.
        player: String,
    },
}
