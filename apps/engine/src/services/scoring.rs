//! Scoring collaborator port.
//!
//! Invoked once per ended game. The engine never retries; retry and backoff
//! policy belongs to the collaborator behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::scoring::ScoreRequest;
use crate::errors::domain::DomainError;

/// Opaque acknowledgement from the scoring collaborator, passed through to
/// the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAck {
    pub status: u16,
    pub message: String,
}

#[async_trait]
pub trait ScoreReporter: Send + Sync {
    async fn report(&self, request: &ScoreRequest) -> Result<ScoreAck, DomainError>;
}
