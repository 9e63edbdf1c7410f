//! Billing error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Domain-level billing error.
///
/// Every failure here is deterministic: the same invoice and play table always
/// produce the same error, so callers should surface it rather than retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A performance referenced a play that is not in the lookup table.
    #[error("unknown play: {0}")]
    UnknownPlay(PlayId),

    /// A play carried a genre outside the supported set.
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated (e.g. amount overflow).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl BillingError {
    pub fn unknown_play(id: PlayId) -> Self {
        Self::UnknownPlay(id)
    }

    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre(genre.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
