//! Persisted team store.
//!
//! Teams live in a single JSON document mapping team name to an ordered
//! member list. The document is read wholesale at session start and
//! overwritten wholesale on every mutation; there is no locking, which is
//! acceptable for the expected single-operator usage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScorerError};


/// On-disk team store: team name -> member names in insertion order.
#[derive(Debug)]
pub struct TeamStore {
    path: PathBuf,
    teams: BTreeMap<String, Vec<String>>,
}

impl TeamStore {
    /// Open the store at `path`, creating an empty one in memory if the
    /// file does not exist yet. A file that exists but fails to parse is
    /// fatal: a corrupt store must not be silently overwritten.
    pub fn open(path: &Path) -> Result<Self> {
        let teams = if path.exists() {
            let contents = fs::read_to_string(path)?;
            serde_json::from_str(&contents).map_err(|e| ScorerError::Store {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            teams,
        })
    }

    /// Overwrite the backing file with the current state.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.teams)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Team names with their member lists, in stable (alphabetical) order.
    pub fn teams(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.teams.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn members(&self, name: &str) -> Result<&Vec<String>> {
        self.teams.get(name).ok_or_else(|| ScorerError::TeamNotFound {
            name: name.to_string(),
        })
    }

    pub fn create_team(&mut self, name: &str) -> Result<()> {
        if self.teams.contains_key(name) {
            return Err(ScorerError::TeamExists {
                name: name.to_string(),
            });
        }
        self.teams.insert(name.to_string(), Vec::new());
        self.save()
    }

    pub fn delete_team(&mut self, name: &str) -> Result<()> {
        if self.teams.remove(name).is_none() {
            return Err(ScorerError::TeamNotFound {
                name: name.to_string(),
            });
        }
        self.save()
    }

    /// Append a member to a team. A player name may appear at most once
    /// per team; insertion order is preserved for display.
    pub fn add_member(&mut self, team: &str, player: &str) -> Result<()> {
        let members = self.teams.get_mut(team).ok_or_else(|| ScorerError::TeamNotFound {
            name: team.to_string(),
        })?;
        if members.iter().any(|m| m == player) {
            return Err(ScorerError::DuplicateMember {
                team: team.to_string(),
                player: player.to_string(),
            });
        }
        members.push(player.to_string());
        self.save()
    }

    pub fn remove_member(&mut self, team: &str, player: &str) -> Result<()> {
        let members = self.teams.get_mut(team).ok_or_else(|| ScorerError::TeamNotFound {
            name: team.to_string(),
        })?;
        let Some(idx) = members.iter().position(|m| m == player) else {
            return Err(ScorerError::MemberNotFound {
                team: team.to_string(),
                player: player.to_string(),
            });
        };
        members.remove(idx);
        self.save()
    }
}

/// Default store location: `<data_dir>/ipl-scorer/teams.json`, falling
/// back to the working directory when no platform data dir is available.
pub fn default_store_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("ipl-scorer").join("teams.json")
}
