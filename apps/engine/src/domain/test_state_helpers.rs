//! Shared builders for domain tests.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::lifecycle::new_game;
use crate::domain::moves::apply_move;
use crate::domain::outcome::Outcome;
use crate::domain::state::{Game, Player};

pub const FIRST: &str = "alice";
pub const SECOND: &str = "bob";

pub fn make_game(board_size: usize) -> Game {
    new_game(
        Uuid::nil(),
        FIRST,
        SECOND,
        board_size,
        OffsetDateTime::UNIX_EPOCH,
    )
}

/// Apply a scripted sequence, asserting every move lands as `Moved`.
pub fn play_all(game: &mut Game, moves: &[(Player, usize, usize)]) {
    for &(who, row, col) in moves {
        let outcome = apply_move(game, who, row, col).expect("scripted move in bounds");
        assert_eq!(outcome, Outcome::Moved, "move ({row}, {col}) by {who:?}");
    }
}
