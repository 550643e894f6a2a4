//! Zone configuration loader.

use std::path::Path;

use anyhow::Context;
use zone_core::ZoneConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for zone configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ZoneConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse config data from TOML text. Missing keys take their defaults.
    pub fn parse(content: &str) -> LoadResult<ZoneConfig> {
        toml::from_str(content).context("Failed to parse config TOML")
    }
}
