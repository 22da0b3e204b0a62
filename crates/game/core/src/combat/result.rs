//! Per-target results of an action.

use crate::stats::StatKind;

/// One stat change caused by a buff or debuff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatChange {
    pub stat: StatKind,
    /// Signed change actually applied to the current value.
    pub delta: i32,
}

/// What happened to one target of an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetOutcome {
    /// The accuracy roll failed; nothing changed.
    Missed,
    /// HP was lowered by `amount` (possibly 0).
    Damaged { amount: i32 },
    /// Stats were raised or lowered.
    Modified { changes: Vec<StatChange> },
}
