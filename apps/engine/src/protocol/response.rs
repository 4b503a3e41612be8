//! Outcome and error mapping for the excluded transport layer.
//!
//! The transport collaborator owns HTTP; this module fixes the response class
//! each outcome and error maps to, so the mapping survives transport changes.

use crate::domain::outcome::Outcome;
use crate::errors::domain::DomainError;

/// Closed set of response classes the transport maps onto its status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseClass {
    Success,
    ResetContent,
    AlreadyReported,
    BadRequest,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl ResponseClass {
    /// HTTP status equivalent, for transports that speak HTTP.
    pub const fn status_code(self) -> u16 {
        match self {
            ResponseClass::Success => 200,
            ResponseClass::ResetContent => 205,
            ResponseClass::AlreadyReported => 208,
            ResponseClass::BadRequest => 400,
            ResponseClass::Forbidden => 403,
            ResponseClass::NotFound => 404,
            ResponseClass::Conflict => 409,
            ResponseClass::Internal => 500,
        }
    }

    pub const fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Moved | Outcome::Finished => ResponseClass::Success,
            Outcome::Won | Outcome::Draw => ResponseClass::ResetContent,
            Outcome::OutOfTurn => ResponseClass::Forbidden,
            Outcome::CellOccupied => ResponseClass::AlreadyReported,
            Outcome::GameFinished => ResponseClass::Conflict,
        }
    }

    pub fn for_error(error: &DomainError) -> Self {
        match error {
            DomainError::Validation(..) => ResponseClass::BadRequest,
            DomainError::NotFound(..) => ResponseClass::NotFound,
            DomainError::Conflict(..) => ResponseClass::Conflict,
            DomainError::Infra(..) => ResponseClass::Internal,
        }
    }
}
