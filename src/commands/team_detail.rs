//! Team detail command implementation

use std::path::PathBuf;

use crate::{cli::CatalogPaths, error::Result, teams::team_detail};

use super::common::{load_catalog_from, open_store};

/// Print one team's per-player score breakdown, best score first.
pub fn handle_team_detail(
    name: &str,
    store_path: Option<PathBuf>,
    catalog_paths: &CatalogPaths,
    as_json: bool,
) -> Result<()> {
    let store = open_store(store_path)?;
    let catalog = load_catalog_from(catalog_paths)?;

    let members = store.members(name)?;
    let detail = team_detail(name, members, &catalog);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("{}", detail.team);
    println!("Total score: {:.2}", detail.total);
    for player in &detail.players {
        println!("  {:<30} {:<12} {:>10.2}", player.player, player.role.to_string(), player.score);
    }

    Ok(())
}
