//! Player (explorer) loader.

use std::path::Path;

use anyhow::Context;
use battle_core::{ContentOracle, Job, RecordKind, StatKind, Storage, Unit};
use serde::{Deserialize, Serialize};

use crate::loaders::records::{SlotNames, parse_element};
use crate::loaders::{LoadResult, read_file};

fn first_level() -> i32 {
    1
}

fn no_element() -> i32 {
    -1
}

fn even_development() -> Vec<f32> {
    vec![1.0; StatKind::COUNT]
}

/// Job section of a player file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: String,
    /// Growth factor per stat, in HP, ATK, DEF, MAGI, RES, SPD, LUCK order.
    #[serde(default = "even_development")]
    pub development: Vec<f32>,
}

/// Player file: `players/{name}.ron`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default = "first_level")]
    pub level: i32,
    #[serde(default = "no_element")]
    pub element: i32,
    pub stats: Vec<i32>,
    pub job: JobRecord,
    #[serde(default)]
    pub actions: SlotNames,
    /// Item names the explorer starts with.
    #[serde(default)]
    pub bag: Vec<String>,
    #[serde(default)]
    pub wallet: i32,
}

/// Loader for the player-controlled explorer.
pub struct PlayerLoader;

impl PlayerLoader {
    /// Load an explorer from a RON file, resolving actions and items through `content`.
    pub fn load(path: &Path, content: &dyn ContentOracle) -> LoadResult<Unit> {
        let text = read_file(path)?;
        let record: PlayerRecord = ron::from_str(&text)
            .map_err(|e| anyhow::anyhow!("Failed to parse player RON {}: {}", path.display(), e))?;
        Self::build(record, content)
    }

    pub fn build(record: PlayerRecord, content: &dyn ContentOracle) -> LoadResult<Unit> {
        let development: [f32; StatKind::COUNT] =
            record.job.development.as_slice().try_into().map_err(|_| {
                anyhow::anyhow!(
                    "job '{}' lists {} development factors, expected {}",
                    record.job.name,
                    record.job.development.len(),
                    StatKind::COUNT
                )
            })?;
        let job = Job::new(record.job.name, development);
        let mut player = Unit::explorer(&record.name, record.level, &record.stats, job)
            .with_context(|| format!("player '{}' has invalid stats", record.name))?
            .with_element(parse_element(record.element)?);

        record
            .actions
            .equip(&mut player, RecordKind::Player, content)
            .with_context(|| format!("failed to equip player '{}'", record.name))?;

        if let Some(kit) = player.explorer_mut() {
            for name in &record.bag {
                let item = content.load_item(name)?;
                if let Err(item) = kit.bag.store(item) {
                    anyhow::bail!(
                        "player '{}' starts with more items than fit ({})",
                        record.name,
                        item.name
                    );
                }
            }
            kit.wallet.deposit(record.wallet)?;
        }

        tracing::debug!("loaded player {}", player.name());
        Ok(player)
    }
}
