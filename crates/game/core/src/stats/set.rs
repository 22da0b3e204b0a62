//! The fixed seven-stat record carried by every unit.

use super::{Stat, StatError};
use crate::config::BattleConfig;

/// The seven stats, in canonical order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(u8)]
pub enum StatKind {
    Hp = 0,
    Atk = 1,
    Def = 2,
    Magi = 3,
    Res = 4,
    Spd = 5,
    Luck = 6,
}

impl StatKind {
    pub const COUNT: usize = BattleConfig::STAT_COUNT;

    /// Returns all stat kinds in order.
    pub const fn all() -> [StatKind; Self::COUNT] {
        [
            StatKind::Hp,
            StatKind::Atk,
            StatKind::Def,
            StatKind::Magi,
            StatKind::Res,
            StatKind::Spd,
            StatKind::Luck,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Parses a content stat name ("HP", "ATK", ...).
    pub fn parse(name: &str) -> Result<Self, StatError> {
        name.parse()
            .map_err(|_| StatError::UndefinedKey(name.to_string()))
    }
}

/// Complete stat set of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSet {
    stats: [Stat; StatKind::COUNT],
}

impl StatSet {
    /// Builds a set from one initial value per stat, in [`StatKind`] order.
    ///
    /// The initializer length is checked before any stat is created.
    pub fn new(initial: &[i32]) -> Result<Self, StatError> {
        let values: &[i32; StatKind::COUNT] =
            initial.try_into().map_err(|_| StatError::WrongSize {
                expected: StatKind::COUNT,
                actual: initial.len(),
            })?;
        Ok(Self {
            stats: values.map(Stat::new),
        })
    }

    #[inline]
    pub fn get(&self, kind: StatKind) -> &Stat {
        &self.stats[kind.as_index()]
    }

    #[inline]
    pub fn get_mut(&mut self, kind: StatKind) -> &mut Stat {
        &mut self.stats[kind.as_index()]
    }

    /// Iterates `(kind, stat)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, &Stat)> {
        StatKind::all().into_iter().zip(self.stats.iter())
    }

    /// Resets every stat to its maximum (e.g. resting at an inn).
    pub fn reset_all(&mut self) {
        self.stats.iter_mut().for_each(Stat::reset);
    }

    /// Resets every stat but HP, clearing buffs and debuffs between encounters.
    pub fn cleanse_all(&mut self) {
        for kind in StatKind::all() {
            if kind != StatKind::Hp {
                self.get_mut(kind).reset();
            }
        }
    }
}
