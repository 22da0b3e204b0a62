//! Action domain: immutable move descriptors and the three-slot action set.
//!
//! # Module Structure
//!
//! - `types`: `Action`, its closed `ActionKind` (Damage, Buff, Debuff),
//!   `Category` and `Target`
//! - `set`: `ActionSet` with its basic/skill/critical slots
//! - `error`: `ActionError`

pub mod error;
pub mod set;
pub mod types;

pub use error::ActionError;
pub use set::{ActionSet, Slot};
pub use types::{Action, ActionBuilder, ActionKind, Category, StatList, Target};
