//! A single stat: current value bounded below by zero, and a maximum.

use super::StatError;

/// One stat of a unit.
///
/// `current` may exceed `max` while a buff is active; [`Stat::reset`] brings
/// it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    current: i32,
    max: i32,
}

impl Stat {
    /// Creates a stat with both current and max at `initial`.
    pub const fn new(initial: i32) -> Self {
        Self {
            current: initial,
            max: initial,
        }
    }

    #[inline]
    pub const fn current(&self) -> i32 {
        self.current
    }

    #[inline]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Raises the maximum by `amount`. Current is untouched until [`reset`](Self::reset).
    pub fn develop(&mut self, amount: i32) -> Result<(), StatError> {
        if amount < 0 {
            return Err(StatError::negative(amount));
        }
        self.max += amount;
        Ok(())
    }

    /// Raises current by `amount`, possibly above max.
    pub fn raise_by(&mut self, amount: i32) -> Result<(), StatError> {
        if amount <= 0 {
            return Err(StatError::non_positive(amount));
        }
        self.current += amount;
        Ok(())
    }

    /// Lowers current by `amount`, flooring at 0.
    pub fn lower_by(&mut self, amount: i32) -> Result<(), StatError> {
        if amount <= 0 {
            return Err(StatError::non_positive(amount));
        }
        self.current = if self.current > amount {
            self.current - amount
        } else {
            0
        };
        Ok(())
    }

    /// Sets current back to max.
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}
