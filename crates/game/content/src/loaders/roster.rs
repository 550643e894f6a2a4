//! Starting roster loader.

use std::path::Path;

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};
use zone_core::{ItemData, MonsterData, PlayerData, Roster, ZoneConfig};

use crate::loaders::{LoadResult, read_file};

/// Roster structure for RON files.
///
/// Lists are unbounded here so that capacity violations surface as a
/// readable load error instead of a deserializer message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSpec {
    pub players: Vec<PlayerData>,
    #[serde(default)]
    pub items: Vec<ItemData>,
    #[serde(default)]
    pub monsters: Vec<MonsterData>,
}

impl RosterSpec {
    /// Checks capacities and lays the lists out as a [`Roster`].
    pub fn into_roster(self) -> LoadResult<Roster> {
        ensure!(
            self.players.len() == ZoneConfig::NUM_PLAYERS,
            "roster must list exactly {} players, found {}",
            ZoneConfig::NUM_PLAYERS,
            self.players.len()
        );

        let mut players = [PlayerData::default(); ZoneConfig::NUM_PLAYERS];
        players.copy_from_slice(&self.players);

        let mut roster = Roster::new(players);
        for item in self.items {
            roster.push_item(item)?;
        }
        for monster in self.monsters {
            roster.push_monster(monster)?;
        }
        Ok(roster)
    }
}

/// Loader for the starting roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let spec: RosterSpec = ron::from_str(content).context("Failed to parse roster RON")?;
        spec.into_roster()
    }
}
