//! Team management commands: list, create, delete, add, remove.

use std::path::PathBuf;

use crate::{
    cli::TeamCmd,
    error::{Result, ScorerError},
};

use super::common::{load_catalog_from, open_store};

/// Handle a `team` subcommand against the persisted store.
pub fn handle_team(cmd: TeamCmd, store_path: Option<PathBuf>) -> Result<()> {
    let mut store = open_store(store_path)?;

    match cmd {
        TeamCmd::List => {
            if store.is_empty() {
                println!("No teams in store ({})", store.path().display());
                return Ok(());
            }
            for (name, members) in store.teams() {
                println!("{} ({} players)", name, members.len());
            }
        }

        TeamCmd::Create { name } => {
            store.create_team(&name)?;
            println!("✓ Team '{}' created", name);
        }

        TeamCmd::Delete { name } => {
            store.delete_team(&name)?;
            println!("✓ Team '{}' deleted", name);
        }

        TeamCmd::Add {
            team,
            player,
            catalog,
        } => {
            let catalog = load_catalog_from(&catalog)?;
            let record = catalog.get(&player).ok_or_else(|| ScorerError::PlayerNotFound {
                name: player.clone(),
            })?;
            store.add_member(&team, &player)?;
            println!("✓ Added {} ({}) to {}", player, record.role, team);
        }

        TeamCmd::Remove { team, player } => {
            store.remove_member(&team, &player)?;
            println!("✓ Removed {} from {}", player, team);
        }
    }

    Ok(())
}
