//! Level gauges: unit levels, job ranks and the explorer's letter rank.
//!
//! Progression is centesimal: the candidate level after earning is
//! `progression % 100 + 1`, and a level only ever moves up.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when feeding progression points.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionError {
    #[error("{0} progression points can't be negative")]
    Argument(i32),
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "PROGRESSION_ARGUMENT"
    }
}

/// Anything that levels up from progression points.
pub trait Progression {
    /// Current level value.
    fn value(&self) -> i32;

    /// Adds progression points and returns true if the level went up.
    fn earn(&mut self, amount: i32) -> Result<bool, ProgressionError>;
}

/// Uncapped level counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    value: i32,
    progression: i32,
}

impl Level {
    pub const MIN: i32 = 1;

    /// Starts counting at `initial` (clamped to at least 1).
    pub fn new(initial: i32) -> Self {
        let value = initial.max(Self::MIN);
        Self {
            value,
            progression: (value - 1) * 100,
        }
    }

    #[inline]
    pub const fn progression(&self) -> i32 {
        self.progression
    }

    fn apply(&mut self, amount: i32) -> bool {
        self.progression += amount;
        let candidate = self.progression % 100 + 1;
        let leveled_up = candidate > self.value;
        if leveled_up {
            self.value = candidate;
        }
        leveled_up
    }
}

impl Progression for Level {
    fn value(&self) -> i32 {
        self.value
    }

    fn earn(&mut self, amount: i32) -> Result<bool, ProgressionError> {
        if amount < 0 {
            return Err(ProgressionError::Argument(amount));
        }
        Ok(self.apply(amount))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(Self::MIN)
    }
}

/// Level with a ceiling. Earning stops once the ceiling is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rank {
    level: Level,
    max: i32,
}

impl Rank {
    pub fn new(initial: i32, max: i32) -> Self {
        let max = max.max(Level::MIN);
        Self {
            level: Level::new(initial.min(max)),
            max,
        }
    }

    #[inline]
    pub const fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub fn is_capped(&self) -> bool {
        self.level.value >= self.max
    }

    #[inline]
    pub const fn progression(&self) -> i32 {
        self.level.progression
    }
}

impl Progression for Rank {
    fn value(&self) -> i32 {
        self.level.value
    }

    /// Capped ranks ignore their input entirely, including invalid amounts.
    fn earn(&mut self, amount: i32) -> Result<bool, ProgressionError> {
        if self.is_capped() {
            return Ok(false);
        }
        if amount < 0 {
            return Err(ProgressionError::Argument(amount));
        }
        let leveled_up = self.level.apply(amount);
        if self.level.value > self.max {
            self.level.value = self.max;
        }
        Ok(leveled_up)
    }
}

/// Outcome of [`ExplorerRank::promote`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankUp {
    pub leveled_up: bool,
    pub letter_changed: bool,
}

/// Adventurer rank shown on the explorer card.
///
/// Every earn counts as exactly one full level worth of progression; the
/// level is grouped into letter buckets of five.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorerRank {
    level: Level,
}

impl ExplorerRank {
    pub const BUCKET_SIZE: i32 = 5;
    pub const LETTERS: [char; 8] = ['H', 'G', 'F', 'E', 'D', 'C', 'B', 'A'];
    const NORMALIZED_AMOUNT: i32 = 100;

    pub fn new(initial: i32) -> Self {
        Self {
            level: Level::new(initial),
        }
    }

    /// Letter bucket index (value / 5).
    #[inline]
    pub const fn bucket(&self) -> i32 {
        self.level.value / Self::BUCKET_SIZE
    }

    /// Rank letter, clamped to the last bucket.
    pub fn letter(&self) -> char {
        let index = (self.bucket() as usize).min(Self::LETTERS.len() - 1);
        Self::LETTERS[index]
    }

    /// Earns one normalized step and reports both level and letter changes.
    pub fn promote(&mut self) -> RankUp {
        let bucket = self.bucket();
        let leveled_up = self.level.apply(Self::NORMALIZED_AMOUNT);
        RankUp {
            leveled_up,
            letter_changed: self.bucket() != bucket,
        }
    }
}

impl Progression for ExplorerRank {
    fn value(&self) -> i32 {
        self.level.value
    }

    /// The amount is normalized, so any input is accepted.
    fn earn(&mut self, _amount: i32) -> Result<bool, ProgressionError> {
        Ok(self.promote().leveled_up)
    }
}

impl Default for ExplorerRank {
    fn default() -> Self {
        Self::new(Level::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_centesimal_rule() {
        let mut level = Level::new(1);
        assert!(level.earn(4).unwrap());
        assert_eq!(level.value(), 5);
        assert!(!level.earn(0).unwrap());
        assert_eq!(level.value(), 5);
    }

    #[test]
    fn split_earns_match_single_earn() {
        let mut split = Level::new(1);
        for amount in [3, 10, 0, 22] {
            split.earn(amount).unwrap();
        }
        let mut single = Level::new(1);
        single.earn(35).unwrap();

        assert_eq!(split.value(), 1 + 35 % 100);
        assert_eq!(split, single);
    }

    #[test]
    fn level_never_goes_down() {
        let mut level = Level::new(1);
        level.earn(90).unwrap();
        assert_eq!(level.value(), 91);
        assert!(!level.earn(20).unwrap());
        assert_eq!(level.value(), 91);
        assert_eq!(level.progression(), 110);
    }

    #[test]
    fn negative_earn_is_rejected() {
        let mut level = Level::new(1);
        assert_eq!(level.earn(-5), Err(ProgressionError::Argument(-5)));
        assert_eq!(level.progression(), 0);
    }

    #[test]
    fn rank_stops_at_cap() {
        let mut rank = Rank::new(1, 10);
        assert!(rank.earn(50).unwrap());
        assert_eq!(rank.value(), 10);
        assert!(rank.is_capped());

        let before = rank;
        assert_eq!(rank.earn(5), Ok(false));
        assert_eq!(rank.earn(-5), Ok(false));
        assert_eq!(rank, before);
    }

    #[test]
    fn explorer_rank_normalizes_input() {
        let mut rank = ExplorerRank::new(4);
        assert_eq!(rank.letter(), 'H');
        let progression = rank.level.progression();
        assert_eq!(rank.earn(-3), Ok(false));
        assert_eq!(rank.level.progression(), progression + 100);
    }

    #[test]
    fn explorer_rank_letter_buckets() {
        assert_eq!(ExplorerRank::new(5).letter(), 'G');
        assert_eq!(ExplorerRank::new(39).letter(), 'A');
        assert_eq!(ExplorerRank::new(99).letter(), 'A');
        assert_eq!(ExplorerRank::new(12).bucket(), 2);
    }
}
