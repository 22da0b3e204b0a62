//! Oracle access errors.
//!
//! Errors related to content availability and validity.

use crate::error::{ErrorSeverity, GameError};

/// Kind of record requested from a [`ContentOracle`](super::ContentOracle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RecordKind {
    Action,
    Item,
    Hostile,
    Player,
}

/// Errors that occur when loading content.
///
/// Oracle errors abort the lookup that raised them and are never retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// No record exists under the requested name.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: RecordKind, name: String },

    /// The record exists but could not be parsed.
    #[error("failed to parse {kind} '{name}': {message}")]
    Parse {
        kind: RecordKind,
        name: String,
        message: String,
    },

    /// A discriminator or code had no recognized mapping.
    #[error("'{value}' is not a valid {field}")]
    UndefinedKey { field: &'static str, value: String },

    /// The record parsed but describes an invalid model (e.g. a stat list of the wrong size).
    #[error("{kind} '{name}' is invalid: {message}")]
    Invalid {
        kind: RecordKind,
        name: String,
        message: String,
    },
}

impl OracleError {
    pub fn not_found(kind: RecordKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn undefined_key(field: &'static str, value: impl ToString) -> Self {
        Self::UndefinedKey {
            field,
            value: value.to_string(),
        }
    }

    pub fn invalid(kind: RecordKind, name: impl Into<String>, error: impl ToString) -> Self {
        Self::Invalid {
            kind,
            name: name.into(),
            message: error.to_string(),
        }
    }
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Unreadable content is fatal for the encounter that needed it
            NotFound { .. } | Parse { .. } => ErrorSeverity::Fatal,

            // Malformed records are validation errors - the data must change
            UndefinedKey { .. } | Invalid { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            NotFound { .. } => "ORACLE_NOT_FOUND",
            Parse { .. } => "ORACLE_PARSE",
            UndefinedKey { .. } => "ORACLE_UNDEFINED_KEY",
            Invalid { .. } => "ORACLE_INVALID_RECORD",
        }
    }
}
