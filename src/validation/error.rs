//! Error types for rule configuration.
//!
//! Contract violations are never errors; they are reported through the
//! diagnostic sink. Only caller misconfiguration surfaces here.

use thiserror::Error;

/// Errors raised when a caller-supplied pattern cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern source is not a valid regular expression.
    #[error("invalid pattern /{pattern}/: {reason}")]
    Invalid {
        /// The pattern source as supplied.
        pattern: String,
        /// Description of the compilation failure.
        reason: String,
    },
}

impl PatternError {
    /// Creates an invalid-pattern error.
    #[must_use]
    pub fn invalid(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Invalid { pattern, .. } => pattern,
        }
    }

    pub(crate) fn from_regex(pattern: &str, error: &regex::Error) -> Self {
        Self::invalid(pattern, error.to_string())
    }
}
