//! Content loaders for reading battle data from files.
//!
//! Records are RON files (one file per action, item, hostile or player) and
//! configuration is TOML. [`ContentFactory`] ties them together over a data
//! directory and serves records to the core through `ContentOracle`.

pub mod config;
pub mod factory;
pub mod player;
pub mod records;

pub use config::{ConfigLoader, FloorLoader};
pub use factory::ContentFactory;
pub use player::{JobRecord, PlayerLoader, PlayerRecord};
pub use records::{ActionRecord, HostileRecord, ItemRecord, SlotNames};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
