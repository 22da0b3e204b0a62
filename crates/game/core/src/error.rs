//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g., `StatError`, `EncounterError`) are defined in
//! their respective modules alongside the operations they validate. This
//! module provides the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each model has its own error type with specific variants
//! - **Local Scope**: Every error belongs to the call that produced it; there is
//!   no global failure state and nothing is retried internally
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected engine condition that requires investigation
/// - **Fatal**: Required collaborator data is missing or unreadable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - malformed argument or contract violation.
    ///
    /// Examples: negative stat amount, stat initializer of the wrong size
    Validation,

    /// Internal error - the engine could not make progress.
    ///
    /// Examples: party draw attempts exhausted, turn limit reached
    Internal,

    /// Fatal error - content needed by the encounter could not be produced.
    ///
    /// Examples: hostile record not found, record failed to parse
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug or broken content.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, logging and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
