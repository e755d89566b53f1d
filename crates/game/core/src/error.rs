//! Common error infrastructure for arena-core.
//!
//! Domain errors (`CombatantError`, `BattleError`, `ConfigError`,
//! `MatchupError`) live next to the types they validate. This module only
//! holds the shared classification used by callers to decide how to react.
//!
//! The numeric rules themselves are total: damage is floored at one and
//! health is clamped, so nothing inside a round can fail. Errors only arise
//! at construction time or from misusing a finished battle.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input rejected at construction; fix the input and retry.
    ///
    /// Examples: zero max health, zero round cap, inverted variance bounds
    Validation,

    /// Caller drove the engine out of order; the call must not be retried.
    ///
    /// Examples: executing a round on a battle that already ended
    Misuse,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Misuse => "misuse",
        }
    }

    /// Returns true if a corrected input may succeed.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all arena-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity based on what the caller can do about it.
pub trait ArenaError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and for matching in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Misuse.as_str(), "misuse");
        assert!(ErrorSeverity::Validation.is_recoverable());
        assert!(!ErrorSeverity::Misuse.is_recoverable());
    }
}
