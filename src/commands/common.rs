//! Common helpers shared across command implementations.

use std::path::PathBuf;

use crate::catalog::{load_catalog, Catalog};
use crate::cli::CatalogPaths;
use crate::error::Result;
use crate::storage::{default_store_path, TeamStore};

/// Open the team store at the explicit path, or the platform default.
pub fn open_store(path: Option<PathBuf>) -> Result<TeamStore> {
    let path = path.unwrap_or_else(default_store_path);
    TeamStore::open(&path)
}

/// Load the full player catalog from the three partition CSVs.
pub fn load_catalog_from(paths: &CatalogPaths) -> Result<Catalog> {
    load_catalog(&paths.batters, &paths.bowlers, &paths.allrounders)
}
