use crate::domain::board::Board;
use crate::domain::outcome::Outcome;
use crate::domain::rules::{RUN_DIRECTIONS, WIN_RUN};
use crate::domain::state::{Game, GameStatus, Player};
use crate::errors::domain::DomainError;

/// Apply one move, enforcing status, turn order, and cell legality in that
/// fixed order.
///
/// Rule violations come back as rejection outcomes with the game untouched;
/// only malformed coordinates are an error.
pub fn apply_move(
    game: &mut Game,
    who: Player,
    row: usize,
    col: usize,
) -> Result<Outcome, DomainError> {
    if !game.status.accepts_moves() {
        return Ok(Outcome::GameFinished);
    }
    // `last_player` is None before the first move, so the first move is
    // trivially in turn.
    if game.last_player == Some(who) {
        return Ok(Outcome::OutOfTurn);
    }
    if game.board.get(row, col)?.is_some() {
        return Ok(Outcome::CellOccupied);
    }

    game.board.set(row, col, Some(who))?;
    game.last_move = Some((row, col));
    game.last_player = Some(who);

    if winning_run(&game.board, who, row, col).is_some() {
        game.winner = Some(who);
        game.status = GameStatus::Won;
        return Ok(Outcome::Won);
    }
    if game.board.is_full() {
        game.status = GameStatus::Draw;
        return Ok(Outcome::Draw);
    }
    Ok(Outcome::Moved)
}

/// First axis direction whose run through `(row, col)` reaches the winning
/// length, if any. Order among directions is not significant; the outcome is
/// identical whichever qualifies.
pub fn winning_run(board: &Board, who: Player, row: usize, col: usize) -> Option<(i8, i8)> {
    RUN_DIRECTIONS
        .into_iter()
        .find(|&dir| board.count_run(who, row, col, dir) >= WIN_RUN)
}
