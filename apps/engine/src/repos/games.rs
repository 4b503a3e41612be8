//! Game repository port for the domain layer.
//!
//! The engine never calls storage itself: services load a game through this
//! port, run the pure operations, and persist the returned game.

use async_trait::async_trait;

use crate::domain::state::{Game, GameId};
use crate::errors::domain::{DomainError, NotFoundKind};

#[async_trait]
pub trait GameRepo: Send + Sync {
    /// Load a game by id; `None` when absent.
    async fn find_by_id(&self, game_id: GameId) -> Result<Option<Game>, DomainError>;

    /// Persist a freshly created game.
    async fn create(&self, game: Game) -> Result<Game, DomainError>;

    /// Replace a game, validating `expected_lock_version` before writing.
    ///
    /// Bumps the lock version and the update timestamp; returns the stored
    /// game.
    async fn update(&self, game: Game, expected_lock_version: i32) -> Result<Game, DomainError>;

    /// Delete a game. Deleting an absent game is fine (idempotent); a lock
    /// version mismatch on a present game is a conflict.
    async fn delete(&self, game_id: GameId, expected_lock_version: i32)
        -> Result<(), DomainError>;
}

/// Find game by id or return an error if absent.
///
/// This is a convenience helper that converts `None` into a `DomainError`,
/// eliminating the repetitive `ok_or_else` pattern when a game must exist.
pub async fn require_game(repo: &dyn GameRepo, game_id: GameId) -> Result<Game, DomainError> {
    repo.find_by_id(game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}
