//! Error codes for the engine boundary.
//!
//! This module defines all error codes surfaced by the engine. Add new codes
//! here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings the
//! transport collaborator puts in responses.

use core::fmt;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};

/// Centralized error codes for the engine boundary.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string, keeping the
/// wire contract type-safe and exhaustiveness-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Coordinates outside the board
    OutOfBounds,
    /// Player ordinal other than 1 or 2
    InvalidPlayerOrdinal,
    /// Board dimension outside the supported range
    InvalidBoardSize,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Scoring collaborator unreachable or failing
    ScoringUnavailable,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfBounds => "OUT_OF_BOUNDS",
            Self::InvalidPlayerOrdinal => "INVALID_PLAYER_ORDINAL",
            Self::InvalidBoardSize => "INVALID_BOARD_SIZE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",
            Self::ScoringUnavailable => "SCORING_UNAVAILABLE",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(error: &DomainError) -> Self {
        match error {
            DomainError::Validation(ValidationKind::OutOfBounds, _) => Self::OutOfBounds,
            DomainError::Validation(ValidationKind::InvalidPlayerOrdinal, _) => {
                Self::InvalidPlayerOrdinal
            }
            DomainError::Validation(ValidationKind::InvalidBoardSize, _) => Self::InvalidBoardSize,
            DomainError::Validation(..) => Self::ValidationError,
            DomainError::NotFound(NotFoundKind::Game, _) => Self::GameNotFound,
            DomainError::NotFound(..) => Self::NotFound,
            DomainError::Conflict(ConflictKind::OptimisticLock, _) => Self::OptimisticLock,
            DomainError::Conflict(..) => Self::Conflict,
            DomainError::Infra(InfraErrorKind::ScoringUnavailable, _) => Self::ScoringUnavailable,
            DomainError::Infra(..) => Self::Internal,
        }
    }
}
