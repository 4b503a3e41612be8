//! In-memory game repository adapter behavior.

use engine::errors::domain::ConflictKind;
use engine::{new_game, DomainError, GameRepo, GameRepoMem, GameStatus};
use time::OffsetDateTime;
use uuid::Uuid;

fn sample_game() -> engine::Game {
    new_game(
        Uuid::new_v4(),
        "alice",
        "bob",
        18,
        OffsetDateTime::now_utc(),
    )
}

#[tokio::test]
async fn create_then_find_roundtrips() {
    let repo = GameRepoMem::new();
    let game = repo.create(sample_game()).await.unwrap();
    let found = repo.find_by_id(game.id).await.unwrap().unwrap();
    assert_eq!(found, game);
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_create_conflicts() {
    let repo = GameRepoMem::new();
    let game = repo.create(sample_game()).await.unwrap();
    let err = repo.create(game).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::Other(_), _)));
}

#[tokio::test]
async fn update_enforces_the_lock_version() {
    let repo = GameRepoMem::new();
    let mut game = repo.create(sample_game()).await.unwrap();
    assert_eq!(game.lock_version, 1);

    game.status = GameStatus::Finished;
    let updated = repo.update(game.clone(), 1).await.unwrap();
    assert_eq!(updated.lock_version, 2);
    assert_eq!(updated.status, GameStatus::Finished);
    assert!(updated.updated_at >= updated.created_at);

    // A stale writer is refused.
    let err = repo.update(updated.clone(), 1).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));
}

#[tokio::test]
async fn delete_is_idempotent_but_version_checked() {
    let repo = GameRepoMem::new();
    assert!(repo.delete(Uuid::new_v4(), 1).await.is_ok());

    let game = repo.create(sample_game()).await.unwrap();
    let err = repo.delete(game.id, 99).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));

    repo.delete(game.id, game.lock_version).await.unwrap();
    assert!(repo.find_by_id(game.id).await.unwrap().is_none());
}
