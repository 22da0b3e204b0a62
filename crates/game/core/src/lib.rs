//! Deterministic battle rules and data types shared across clients.
//!
//! `battle-core` defines the canonical models (elements, stats, progression,
//! actions, units), the encounter generator and the turn-based
//! [`engine::BattleEngine`]. It never touches storage formats: content comes
//! in through [`env::ContentOracle`] and randomness through
//! [`env::RngOracle`], so supporting crates and tests can plug in their own.
pub mod action;
pub mod combat;
pub mod config;
pub mod element;
pub mod encounter;
pub mod engine;
pub mod env;
pub mod error;
pub mod inventory;
pub mod progression;
pub mod stats;
pub mod unit;

pub use action::{
    Action, ActionBuilder, ActionError, ActionKind, ActionSet, Category, Slot, StatList, Target,
};
pub use combat::{StatChange, TargetOutcome};
pub use config::{BattleConfig, FloorConfig};
pub use element::{Element, damage_modifier};
pub use encounter::{EncounterError, EncounterGenerator, EncounterMode, Party};
pub use engine::{
    AutoBattle, BattleEngine, BattleError, BattlePhase, BattleReport, Outcome, Rewards, Session,
    TurnChoice, TurnController, TurnEvent,
};
pub use env::{
    BattleEnv, CatalogOracle, ContentOracle, OracleError, PcgRng, RecordKind, RngOracle,
    RollKind, RollStream, SequenceRng,
};
pub use error::{ErrorSeverity, GameError};
pub use inventory::{Bag, InventoryError, Item, Storage, Wallet};
pub use progression::{ExplorerRank, Level, Progression, ProgressionError, Rank, RankUp};
pub use stats::{Stat, StatError, StatKind, StatSet};
pub use unit::{EntityId, ExplorerKit, Job, Unit, UnitKind};
