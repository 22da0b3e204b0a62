//! Error types for the battle engine.

use crate::encounter::EncounterError;
use crate::error::{ErrorSeverity, GameError};
use crate::progression::ProgressionError;
use crate::stats::StatError;

use super::BattlePhase;

/// Errors surfaced while driving a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("cannot {operation} while the battle is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: BattlePhase,
    },

    #[error("party generation failed: {0}")]
    Encounter(#[from] EncounterError),

    #[error("battle did not conclude within {0} turns")]
    TurnLimitExceeded(u32),

    #[error("stat update failed: {0}")]
    Stat(#[from] StatError),

    #[error("award failed: {0}")]
    Progression(#[from] ProgressionError),
}

impl BattleError {
    pub(crate) fn phase(operation: &'static str, phase: BattlePhase) -> Self {
        Self::InvalidPhase { operation, phase }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidPhase { .. } => ErrorSeverity::Validation,
            Self::Encounter(error) => error.severity(),
            Self::TurnLimitExceeded(_) => ErrorSeverity::Internal,
            Self::Stat(error) => error.severity(),
            Self::Progression(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPhase { .. } => "BATTLE_INVALID_PHASE",
            Self::Encounter(error) => error.error_code(),
            Self::TurnLimitExceeded(_) => "BATTLE_TURN_LIMIT",
            Self::Stat(error) => error.error_code(),
            Self::Progression(error) => error.error_code(),
        }
    }
}
