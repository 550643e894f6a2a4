//! Content factory for building zone inputs from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use zone_core::{Roster, ZoneConfig, ZoneState};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

const DEFAULT_ROSTER: &str = include_str!("../../data/roster.ron");
const DEFAULT_CONFIG: &str = include_str!("../../data/config.toml");

/// Content factory that loads zone content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load zone configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<ZoneConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the starting roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load the roster and lay it out as a fresh zone.
    pub fn load_state(&self) -> LoadResult<ZoneState> {
        Ok(ZoneState::from_roster(&self.load_roster()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The embedded roster of the original zone.
    pub fn default_roster() -> LoadResult<Roster> {
        RosterLoader::parse(DEFAULT_ROSTER).context("embedded roster.ron")
    }

    /// The embedded zone configuration.
    pub fn default_config() -> LoadResult<ZoneConfig> {
        ConfigLoader::parse(DEFAULT_CONFIG).context("embedded config.toml")
    }

    /// A fresh zone seeded from the embedded roster.
    pub fn default_state() -> LoadResult<ZoneState> {
        Ok(ZoneState::from_roster(&Self::default_roster()?))
    }
}
