use time::OffsetDateTime;

use crate::domain::board::Board;
use crate::domain::outcome::Outcome;
use crate::domain::scoring::{score_request, ScoreRequest};
use crate::domain::state::{Game, GameId, GameStatus, Player};

/// Build a fresh game between two named players.
///
/// Id assignment and clock reads belong to the caller so the domain stays
/// deterministic. Always succeeds; there is nothing to validate.
pub fn new_game(
    id: GameId,
    first_player: impl Into<String>,
    second_player: impl Into<String>,
    board_size: usize,
    now: OffsetDateTime,
) -> Game {
    Game {
        id,
        players: [first_player.into(), second_player.into()],
        board: Board::new(board_size),
        last_player: None,
        last_move: None,
        winner: None,
        status: GameStatus::InProgress,
        created_at: now,
        updated_at: now,
        lock_version: 1,
    }
}

/// Finalize the game record and emit the scoring request for the requesting
/// player.
///
/// Runs from any status: a mid-game call is a resignation, a call on a won or
/// drawn game closes it out. Finishing an already finished game yields
/// `Finished` again with the same request.
pub fn finish_game(game: &mut Game, who: Player) -> (ScoreRequest, Outcome) {
    game.status = GameStatus::Finished;
    (score_request(game, who), Outcome::Finished)
}
