//! Data-driven battle content and loaders.
//!
//! This crate reads the files behind a dungeon's battles:
//! - Actions, items and hostiles (one RON record per file)
//! - Player explorers (RON)
//! - Floor setups and battle configuration (TOML)
//!
//! [`ContentFactory`] implements `battle_core::ContentOracle` over a data
//! directory, so the encounter generator can load hostiles by name without
//! knowing about files. Content never appears in battle state.

pub mod loaders;

pub use loaders::{
    ActionRecord, ConfigLoader, ContentFactory, FloorLoader, HostileRecord, ItemRecord, JobRecord,
    LoadResult, PlayerLoader, PlayerRecord, SlotNames,
};
