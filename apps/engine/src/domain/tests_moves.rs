use crate::domain::moves::{apply_move, winning_run};
use crate::domain::outcome::Outcome;
use crate::domain::state::{GameStatus, Player};
use crate::domain::test_state_helpers::{make_game, play_all};
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn first_move_is_in_turn_with_no_previous_player() {
    let mut game = make_game(18);
    assert_eq!(game.last_player, None);
    assert_eq!(
        apply_move(&mut game, Player::Two, 9, 9).unwrap(),
        Outcome::Moved
    );
    assert_eq!(game.last_player, Some(Player::Two));
    assert_eq!(game.last_move, Some((9, 9)));
}

#[test]
fn same_player_twice_is_rejected_without_mutation() {
    let mut game = make_game(18);
    apply_move(&mut game, Player::One, 5, 5).unwrap();
    let before = game.clone();

    assert_eq!(
        apply_move(&mut game, Player::One, 6, 6).unwrap(),
        Outcome::OutOfTurn
    );
    assert_eq!(game, before);
    assert_eq!(game.board.get(6, 6).unwrap(), None);

    // The turn check precedes occupancy and bounds checks.
    assert_eq!(
        apply_move(&mut game, Player::One, 5, 5).unwrap(),
        Outcome::OutOfTurn
    );
    assert_eq!(
        apply_move(&mut game, Player::One, 99, 99).unwrap(),
        Outcome::OutOfTurn
    );
    assert_eq!(game, before);
}

#[test]
fn occupied_cell_is_rejected_without_mutation() {
    let mut game = make_game(18);
    apply_move(&mut game, Player::One, 5, 5).unwrap();
    let before = game.clone();
    assert_eq!(
        apply_move(&mut game, Player::Two, 5, 5).unwrap(),
        Outcome::CellOccupied
    );
    assert_eq!(game, before);
    assert_eq!(game.board.get(5, 5).unwrap(), Some(Player::One));
}

#[test]
fn out_of_bounds_is_an_error_and_leaves_state_alone() {
    let mut game = make_game(18);
    let before = game.clone();
    for (row, col) in [(18, 0), (0, 18), (18, 18), (usize::MAX, 0)] {
        let err = apply_move(&mut game, Player::One, row, col).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::OutOfBounds, _)
        ));
    }
    assert_eq!(game, before);
}

#[test]
fn horizontal_win_on_the_reference_scenario() {
    // Player one fills (0,0)..(0,3); player two plays elsewhere in between.
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
    assert_eq!(game.winner, Some(Player::One));
    assert_eq!(game.status, GameStatus::Won);
    assert_eq!(game.board.count_run(Player::One, 0, 4, (0, 1)), 5);
    assert_eq!(winning_run(&game.board, Player::One, 0, 4), Some((0, 1)));
}

#[test]
fn win_when_the_middle_of_the_run_lands_last() {
    let mut game = make_game(18);
    play_all(
        &mut game,
        &[
            (Player::One, 3, 1),
            (Player::Two, 12, 1),
            (Player::One, 3, 2),
            (Player::Two, 12, 2),
            (Player::One, 3, 4),
            (Player::Two, 12, 4),
            (Player::One, 3, 5),
            (Player::Two, 12, 5),
        ],
    );
    assert_eq!(
        apply_move(&mut game, Player::One, 3, 3).unwrap(),
        Outcome::Won
    );
    assert_eq!(game.winner, Some(Player::One));
}

#[test]
fn vertical_win_for_the_second_player() {
    let mut game = make_game(18);
    play_all(
        &mut game,
        &[
            (Player::One, 0, 0),
            (Player::Two, 2, 7),
            (Player::One, 0, 1),
            (Player::Two, 3, 7),
            (Player::One, 0, 2),
            (Player::Two, 4, 7),
            (Player::One, 0, 3),
            (Player::Two, 5, 7),
            (Player::One, 15, 15),
        ],
    );
    assert_eq!(
        apply_move(&mut game, Player::Two, 6, 7).unwrap(),
        Outcome::Won
    );
    assert_eq!(game.winner, Some(Player::Two));
    assert_eq!(game.board.count_run(Player::Two, 6, 7, (1, 0)), 5);
}

#[test]
fn diagonal_wins_in_both_orientations() {
    // Down-right diagonal.
    let mut game = make_game(18);
    play_all(
        &mut game,
        &[
            (Player::One, 0, 0),
            (Player::Two, 17, 0),
            (Player::One, 1, 1),
            (Player::Two, 17, 1),
            (Player::One, 2, 2),
            (Player::Two, 17, 2),
            (Player::One, 3, 3),
            (Player::Two, 17, 3),
        ],
    );
    assert_eq!(
        apply_move(&mut game, Player::One, 4, 4).unwrap(),
        Outcome::Won
    );
    assert_eq!(winning_run(&game.board, Player::One, 4, 4), Some((1, 1)));

    // Down-left diagonal.
    let mut game = make_game(18);
    play_all(
        &mut game,
        &[
            (Player::One, 0, 8),
            (Player::Two, 17, 0),
            (Player::One, 1, 7),
            (Player::Two, 17, 1),
            (Player::One, 2, 6),
            (Player::Two, 17, 2),
            (Player::One, 3, 5),
            (Player::Two, 17, 3),
        ],
    );
    assert_eq!(
        apply_move(&mut game, Player::One, 4, 4).unwrap(),
        Outcome::Won
    );
    assert_eq!(winning_run(&game.board, Player::One, 4, 4), Some((1, -1)));
}

#[test]
fn moves_after_a_win_report_game_finished() {
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
    apply_move(&mut game, Player::One, 0, 4).unwrap();
    let before = game.clone();

    assert_eq!(
        apply_move(&mut game, Player::Two, 10, 4).unwrap(),
        Outcome::GameFinished
    );
    // The status check runs first, even ahead of coordinate validation.
    assert_eq!(
        apply_move(&mut game, Player::Two, 99, 99).unwrap(),
        Outcome::GameFinished
    );
    assert_eq!(game, before);
}

#[test]
fn filling_the_board_without_a_run_is_a_draw() {
    // A 4x4 board cannot hold a run of five.
    let mut game = make_game(4);
    let mut turn = Player::One;
    for row in 0..4 {
        for col in 0..4 {
            let outcome = apply_move(&mut game, turn, row, col).unwrap();
            if (row, col) == (3, 3) {
                assert_eq!(outcome, Outcome::Draw);
            } else {
                assert_eq!(outcome, Outcome::Moved);
            }
            turn = turn.opponent();
        }
    }
    assert_eq!(game.status, GameStatus::Draw);
    assert_eq!(game.winner, None);
    assert_eq!(
        apply_move(&mut game, turn, 0, 0).unwrap(),
        Outcome::GameFinished
    );
}
