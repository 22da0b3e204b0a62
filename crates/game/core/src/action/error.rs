//! Action construction and action-set errors.

use crate::error::{ErrorSeverity, GameError};
use crate::stats::StatKind;

/// Errors raised while building actions or equipping them.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// An action slot was assigned nothing.
    #[error("setting an action requires a non-null action")]
    NullAction,

    /// A slot name did not match basic, skill or critical.
    #[error("'{0}' is not a valid action slot")]
    UndefinedSlot(String),

    /// Accuracy outside 0..=100.
    #[error("action '{action}' has accuracy {accuracy}, expected 0..=100")]
    InvalidAccuracy { action: String, accuracy: u32 },

    /// Multiplier negative or not finite.
    #[error("action '{action}' has invalid multiplier {multiplier}")]
    InvalidMultiplier { action: String, multiplier: f32 },

    /// Buff/debuff without any stat to modify.
    #[error("action '{action}' must modify at least one stat")]
    EmptyStatList { action: String },

    /// Buff/debuff naming the same stat twice.
    #[error("action '{action}' lists stat {stat} more than once")]
    DuplicateStat { action: String, stat: StatKind },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NullAction => "ACTION_NULL",
            Self::UndefinedSlot(_) => "ACTION_UNDEFINED_SLOT",
            Self::InvalidAccuracy { .. } => "ACTION_INVALID_ACCURACY",
            Self::InvalidMultiplier { .. } => "ACTION_INVALID_MULTIPLIER",
            Self::EmptyStatList { .. } => "ACTION_EMPTY_STAT_LIST",
            Self::DuplicateStat { .. } => "ACTION_DUPLICATE_STAT",
        }
    }
}
