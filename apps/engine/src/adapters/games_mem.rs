//! In-memory adapter for the game repository.
//!
//! Persistence mechanics are a collaborator concern, so a concurrent map is
//! enough for embedding hosts and tests; the optimistic-lock contract matches
//! what a document store would enforce.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::state::{Game, GameId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games::GameRepo;

#[derive(Debug, Default)]
pub struct GameRepoMem {
    games: DashMap<GameId, Game>,
}

impl GameRepoMem {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }
}

fn lock_mismatch(expected: i32, actual: i32) -> DomainError {
    DomainError::conflict(
        ConflictKind::OptimisticLock,
        format!("Game lock version mismatch: expected {expected}, but game has version {actual}"),
    )
}

#[async_trait]
impl GameRepo for GameRepoMem {
    async fn find_by_id(&self, game_id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.games.get(&game_id).map(|g| g.clone()))
    }

    async fn create(&self, game: Game) -> Result<Game, DomainError> {
        match self.games.entry(game.id) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::Other("DuplicateGameId".to_string()),
                format!("Game {} already exists", game.id),
            )),
            Entry::Vacant(vacant) => {
                vacant.insert(game.clone());
                Ok(game)
            }
        }
    }

    async fn update(&self, mut game: Game, expected_lock_version: i32) -> Result<Game, DomainError> {
        let Some(mut entry) = self.games.get_mut(&game.id) else {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {} not found", game.id),
            ));
        };
        if entry.lock_version != expected_lock_version {
            return Err(lock_mismatch(expected_lock_version, entry.lock_version));
        }
        game.lock_version = expected_lock_version + 1;
        game.updated_at = OffsetDateTime::now_utc();
        *entry = game.clone();
        Ok(game)
    }

    async fn delete(&self, game_id: GameId, expected_lock_version: i32) -> Result<(), DomainError> {
        if let Some(entry) = self.games.get(&game_id) {
            if entry.lock_version != expected_lock_version {
                return Err(lock_mismatch(expected_lock_version, entry.lock_version));
            }
        } else {
            // Absent is fine for delete (idempotent).
            return Ok(());
        }
        self.games.remove(&game_id);
        Ok(())
    }
}
