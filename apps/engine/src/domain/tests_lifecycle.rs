use crate::domain::lifecycle::finish_game;
use crate::domain::moves::apply_move;
use crate::domain::outcome::Outcome;
use crate::domain::scoring::{score_request, ScoreRequest};
use crate::domain::state::{GameStatus, Player};
use crate::domain::test_state_helpers::{make_game, play_all, FIRST, SECOND};

#[test]
fn new_game_starts_clean() {
    let game = make_game(18);
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(game.last_player, None);
    assert_eq!(game.last_move, None);
    assert_eq!(game.winner, None);
    assert_eq!(game.players, [FIRST.to_string(), SECOND.to_string()]);
    assert_eq!(game.board.size(), 18);
    assert_eq!(game.board.stones(Player::One), 0);
    assert_eq!(game.board.stones(Player::Two), 0);
    assert_eq!(game.lock_version, 1);
}

#[test]
fn resigning_mid_game_finalizes_and_scores_the_requester() {
    let mut game = make_game(18);
    play_all(
        &mut game,
        &[
            (Player::One, 0, 0),
            (Player::Two, 1, 0),
            (Player::One, 0, 1),
        ],
    );
    let (request, outcome) = finish_game(&mut game, Player::Two);
    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(
        request,
        ScoreRequest {
            player: SECOND.to_string(),
            moves: 1,
        }
    );
}

#[test]
fn score_request_counts_only_the_requesters_stones() {
    let mut game = make_game(18);
    play_all(
        &mut game,
        &[
            (Player::One, 0, 0),
            (Player::Two, 9, 0),
            (Player::One, 0, 1),
            (Player::Two, 9, 1),
            (Player::One, 0, 2),
        ],
    );
    assert_eq!(
        score_request(&game, Player::One),
        ScoreRequest {
            player: FIRST.to_string(),
            moves: 3,
        }
    );
    assert_eq!(
        score_request(&game, Player::Two),
        ScoreRequest {
            player: SECOND.to_string(),
            moves: 2,
        }
    );
}

#[test]
fn finishing_is_idempotent() {
    let mut game = make_game(18);
    let (first_request, first) = finish_game(&mut game, Player::One);
    let (second_request, second) = finish_game(&mut game, Player::One);
    assert_eq!(first, Outcome::Finished);
    assert_eq!(second, Outcome::Finished);
    assert_eq!(first_request, second_request);
    assert_eq!(game.status, GameStatus::Finished);
}

#[test]
fn closing_out_a_won_game_still_finishes() {
    let mut game = make_game(18);
    play_all(
        &mut game,
        &[
            (Player::One, 0, 0),
            (Player::Two, 10, 0),
            (Player::One, 0, 1),
            (Player::Two, 10, 1),
            (Player::One, 0, 2),
            (Player::Two, 10, 2),
            (Player::One, 0, 3),
            (Player::Two, 10, 3),
        ],
    );
    assert_eq!(
        apply_move(&mut game, Player::One, 0, 4).unwrap(),
        Outcome::Won
    );
    let (request, outcome) = finish_game(&mut game, Player::One);
    assert_eq!(outcome, Outcome::Finished);
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(request.moves, 5);
    // The winner recorded at the winning move survives finalization.
    assert_eq!(game.winner, Some(Player::One));
}

#[test]
fn no_moves_after_an_explicit_finish() {
    let mut game = make_game(18);
    finish_game(&mut game, Player::One);
    let before = game.clone();
    assert_eq!(
        apply_move(&mut game, Player::Two, 0, 0).unwrap(),
        Outcome::GameFinished
    );
    assert_eq!(game, before);
}
