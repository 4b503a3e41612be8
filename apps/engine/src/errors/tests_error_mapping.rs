use std::collections::HashSet;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::error_code::ErrorCode;

const ALL_CODES: [ErrorCode; 10] = [
    ErrorCode::OutOfBounds,
    ErrorCode::InvalidPlayerOrdinal,
    ErrorCode::InvalidBoardSize,
    ErrorCode::ValidationError,
    ErrorCode::GameNotFound,
    ErrorCode::NotFound,
    ErrorCode::OptimisticLock,
    ErrorCode::Conflict,
    ErrorCode::ScoringUnavailable,
    ErrorCode::Internal,
];

#[test]
fn error_code_strings_are_stable() {
    assert_eq!(ErrorCode::OutOfBounds.as_str(), "OUT_OF_BOUNDS");
    assert_eq!(
        ErrorCode::InvalidPlayerOrdinal.as_str(),
        "INVALID_PLAYER_ORDINAL"
    );
    assert_eq!(ErrorCode::InvalidBoardSize.as_str(), "INVALID_BOARD_SIZE");
    assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
    assert_eq!(ErrorCode::GameNotFound.as_str(), "GAME_NOT_FOUND");
    assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    assert_eq!(ErrorCode::OptimisticLock.as_str(), "OPTIMISTIC_LOCK");
    assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
    assert_eq!(ErrorCode::ScoringUnavailable.as_str(), "SCORING_UNAVAILABLE");
    assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
    assert_eq!(format!("{}", ErrorCode::OutOfBounds), "OUT_OF_BOUNDS");
}

#[test]
fn error_codes_are_unique() {
    let strings: HashSet<&'static str> = ALL_CODES.iter().map(|c| c.as_str()).collect();
    assert_eq!(strings.len(), ALL_CODES.len());
}

#[test]
fn domain_errors_map_to_their_codes() {
    assert_eq!(
        ErrorCode::from(&DomainError::validation(ValidationKind::OutOfBounds, "x")),
        ErrorCode::OutOfBounds
    );
    assert_eq!(
        ErrorCode::from(&DomainError::validation(
            ValidationKind::InvalidPlayerOrdinal,
            "x"
        )),
        ErrorCode::InvalidPlayerOrdinal
    );
    assert_eq!(
        ErrorCode::from(&DomainError::validation(
            ValidationKind::InvalidBoardSize,
            "x"
        )),
        ErrorCode::InvalidBoardSize
    );
    assert_eq!(
        ErrorCode::from(&DomainError::validation_other("x")),
        ErrorCode::ValidationError
    );
    assert_eq!(
        ErrorCode::from(&DomainError::not_found(NotFoundKind::Game, "x")),
        ErrorCode::GameNotFound
    );
    assert_eq!(
        ErrorCode::from(&DomainError::not_found(
            NotFoundKind::Other("record".to_string()),
            "x"
        )),
        ErrorCode::NotFound
    );
    assert_eq!(
        ErrorCode::from(&DomainError::conflict(ConflictKind::OptimisticLock, "x")),
        ErrorCode::OptimisticLock
    );
    assert_eq!(
        ErrorCode::from(&DomainError::conflict(
            ConflictKind::Other("id".to_string()),
            "x"
        )),
        ErrorCode::Conflict
    );
    assert_eq!(
        ErrorCode::from(&DomainError::infra(InfraErrorKind::ScoringUnavailable, "x")),
        ErrorCode::ScoringUnavailable
    );
    assert_eq!(
        ErrorCode::from(&DomainError::infra(
            InfraErrorKind::Other("io".to_string()),
            "x"
        )),
        ErrorCode::Internal
    );
}
