//! Traits describing the collaborators the battle core reads from.
//!
//! Content (actions, items, hostile units) arrives through [`ContentOracle`]
//! and randomness through [`RngOracle`]. The core never parses storage
//! formats; concrete oracles live in loader crates or, for tests and
//! embedded content, in [`CatalogOracle`].
mod battle;
mod catalog;
mod content;
mod error;
mod rng;

pub use battle::BattleEnv;
pub use catalog::CatalogOracle;
pub use content::ContentOracle;
pub use error::{OracleError, RecordKind};
pub use rng::{PcgRng, RngOracle, RollKind, RollStream, SequenceRng, compute_seed};
