//! Game orchestration: load a game through the repository port, run the pure
//! rules engine, persist the result, and trigger the scoring collaborator.
//!
//! All state travels through explicit parameters and return values; the
//! service keeps nothing about a game between calls. Callers are expected to
//! serialize operations per game id; a violated expectation surfaces as an
//! optimistic-lock conflict from the repository.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::engine::EngineConfig;
use crate::domain::lifecycle::{finish_game, new_game};
use crate::domain::moves::apply_move;
use crate::domain::outcome::Outcome;
use crate::domain::player_view::{view_for, GameView};
use crate::domain::state::{Game, GameId, Player};
use crate::errors::domain::DomainError;
use crate::repos::games::{require_game, GameRepo};
use crate::services::scoring::{ScoreAck, ScoreReporter};

pub struct GamesService {
    repo: Arc<dyn GameRepo>,
    scores: Arc<dyn ScoreReporter>,
    config: EngineConfig,
}

impl GamesService {
    pub fn new(
        repo: Arc<dyn GameRepo>,
        scores: Arc<dyn ScoreReporter>,
        config: EngineConfig,
    ) -> Self {
        Self {
            repo,
            scores,
            config,
        }
    }

    /// Create and persist a fresh game between two named players.
    pub async fn create_game(
        &self,
        first_player: &str,
        second_player: &str,
    ) -> Result<Game, DomainError> {
        let game = new_game(
            Uuid::new_v4(),
            first_player,
            second_player,
            self.config.board_size,
            OffsetDateTime::now_utc(),
        );
        let game = self.repo.create(game).await?;
        info!(game_id = %game.id, "Game created");
        Ok(game)
    }

    /// Apply one move for the player identified by `ordinal`.
    ///
    /// Rejection outcomes leave the stored game untouched; accepted moves are
    /// persisted before returning.
    pub async fn submit_move(
        &self,
        game_id: GameId,
        ordinal: u8,
        row: usize,
        col: usize,
    ) -> Result<(Game, Outcome), DomainError> {
        let who = Player::try_from(ordinal)?;
        let mut game = require_game(self.repo.as_ref(), game_id).await?;
        let expected_lock_version = game.lock_version;

        let outcome = apply_move(&mut game, who, row, col)?;
        if !outcome.is_rejection() {
            game = self.repo.update(game, expected_lock_version).await?;
        }
        debug!(
            game_id = %game_id,
            player = who.ordinal(),
            outcome = outcome.as_str(),
            "Move processed"
        );
        Ok((game, outcome))
    }

    /// Finalize a game: persist the finished record, report the requesting
    /// player's score, then delete the record.
    ///
    /// A scoring failure surfaces to the caller and leaves the finished
    /// record in place; nothing is retried here.
    pub async fn end_game(
        &self,
        game_id: GameId,
        ordinal: u8,
    ) -> Result<(ScoreAck, Outcome), DomainError> {
        let who = Player::try_from(ordinal)?;
        let mut game = require_game(self.repo.as_ref(), game_id).await?;
        let expected_lock_version = game.lock_version;

        let (request, outcome) = finish_game(&mut game, who);
        let game = self.repo.update(game, expected_lock_version).await?;

        let ack = self.scores.report(&request).await?;
        self.repo.delete(game_id, game.lock_version).await?;
        info!(
            game_id = %game_id,
            player = %request.player,
            moves = request.moves,
            "Game ended"
        );
        Ok((ack, outcome))
    }

    /// Viewer-relative summary for the player identified by `ordinal`.
    pub async fn game_view(&self, game_id: GameId, ordinal: u8) -> Result<GameView, DomainError> {
        let viewer = Player::try_from(ordinal)?;
        let game = require_game(self.repo.as_ref(), game_id).await?;
        Ok(view_for(&game, viewer))
    }
}
