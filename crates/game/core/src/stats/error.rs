//! Stat mutation and construction errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by [`Stat`](super::Stat) and [`StatSet`](super::StatSet).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatError {
    /// A numeric argument was negative (or non-positive where positivity is required).
    #[error("{amount} is not a valid amount: {rule}")]
    Argument { amount: i32, rule: &'static str },

    /// A stat initializer did not have exactly one value per stat.
    #[error("stat initializer should be {expected} long, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    /// A stat name did not match any known stat.
    #[error("'{0}' is not a valid stat")]
    UndefinedKey(String),
}

impl StatError {
    pub(crate) fn negative(amount: i32) -> Self {
        Self::Argument {
            amount,
            rule: "can't be negative",
        }
    }

    pub(crate) fn non_positive(amount: i32) -> Self {
        Self::Argument {
            amount,
            rule: "must be positive",
        }
    }
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Argument { .. } => "STAT_ARGUMENT",
            Self::WrongSize { .. } => "STAT_WRONG_SIZE",
            Self::UndefinedKey(_) => "STAT_UNDEFINED_KEY",
        }
    }
}
