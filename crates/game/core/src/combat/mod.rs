//! Combat formulas.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic and side-effect free; the battle engine
//! feeds in stats and rolls and applies the results.
//!
//! # Core Functions
//!
//! - `check_hit`: Accuracy roll against the action's accuracy
//! - `calculate_damage`: Elemental modifier, stat pair selection and defense
//! - `modifier_amount`: Strength of a buff/debuff on one stat

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{
    calculate_damage, defensive_stat, modifier_amount, offensive_stat, raw_damage,
};
pub use hit::check_hit;
pub use result::{StatChange, TargetOutcome};
