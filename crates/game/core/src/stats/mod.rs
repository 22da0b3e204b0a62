//! Stat system.
//!
//! A [`Stat`] is a current/maximum pair with bounded mutation. Every unit owns
//! a [`StatSet`]: a fixed record of the seven stats named by [`StatKind`].
//!
//! ## Principles
//!
//! 1. **Fixed shape**: the seven stats are known at compile time; open stat
//!    names (buff/debuff lists from content) are validated into [`StatKind`]
//! 2. **Eager validation**: a set is never partially built
//! 3. **Floor at zero**: lowering never takes a current value below 0

pub mod error;
pub mod set;
pub mod stat;

pub use error::StatError;
pub use set::{StatKind, StatSet};
pub use stat::Stat;
