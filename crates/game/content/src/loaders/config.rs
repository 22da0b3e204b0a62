//! Battle and floor configuration loaders.

use std::path::Path;

use battle_core::{BattleConfig, FloorConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

/// Loader for floor setups from TOML files.
pub struct FloorLoader;

impl FloorLoader {
    /// Load a floor from a TOML file.
    ///
    /// ```toml
    /// danger_level = 2
    /// hostiles = ["slime", "bat"]
    /// chances = [60, 40]
    /// boss = "fire_drake"
    /// ```
    pub fn load(path: &Path) -> LoadResult<FloorConfig> {
        let content = read_file(path)?;
        let floor: FloorConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse floor TOML {}: {}", path.display(), e))?;

        if let (Some(hostiles), Some(chances)) = (&floor.hostiles, &floor.chances) {
            anyhow::ensure!(
                hostiles.len() == chances.len(),
                "floor {} lists {} hostiles but {} chances",
                path.display(),
                hostiles.len(),
                chances.len()
            );
        }
        Ok(floor)
    }
}
