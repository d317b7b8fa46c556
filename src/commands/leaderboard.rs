//! Leaderboard command implementation

use std::path::PathBuf;

use crate::{cli::CatalogPaths, error::Result, teams::leaderboard};

use super::common::{load_catalog_from, open_store};

/// Rank every stored team by total score and print the result.
pub fn handle_leaderboard(
    store_path: Option<PathBuf>,
    catalog_paths: &CatalogPaths,
    as_json: bool,
) -> Result<()> {
    let store = open_store(store_path)?;
    let catalog = load_catalog_from(catalog_paths)?;

    let rows = leaderboard(&store, &catalog);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No teams in store. Create one with `ipl-scorer team create <name>`.");
        return Ok(());
    }

    println!("{:<5} {:<30} {:>8} {:>12}", "Rank", "Team", "Players", "Score");
    for row in &rows {
        println!(
            "{:<5} {:<30} {:>8} {:>12.2}",
            row.rank, row.team, row.players, row.score
        );
    }

    Ok(())
}
