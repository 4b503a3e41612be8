use crate::domain::board::Board;
use crate::domain::rules::RUN_DIRECTIONS;
use crate::domain::state::Player;
use crate::errors::domain::{DomainError, ValidationKind};

fn is_out_of_bounds(err: DomainError) -> bool {
    matches!(err, DomainError::Validation(ValidationKind::OutOfBounds, _))
}

#[test]
fn get_and_set_are_bounds_checked() {
    let mut board = Board::new(18);
    assert_eq!(board.get(0, 0).unwrap(), None);
    assert_eq!(board.get(17, 17).unwrap(), None);
    assert!(is_out_of_bounds(board.get(18, 0).unwrap_err()));
    assert!(is_out_of_bounds(board.get(0, 18).unwrap_err()));
    assert!(is_out_of_bounds(board.set(18, 18, Some(Player::One)).unwrap_err()));

    board.set(3, 4, Some(Player::Two)).unwrap();
    assert_eq!(board.get(3, 4).unwrap(), Some(Player::Two));
    board.set(3, 4, None).unwrap();
    assert_eq!(board.get(3, 4).unwrap(), None);
}

#[test]
fn isolated_stone_counts_one_in_every_direction() {
    let mut board = Board::new(18);
    board.set(9, 9, Some(Player::One)).unwrap();
    for dir in RUN_DIRECTIONS {
        assert_eq!(board.count_run(Player::One, 9, 9, dir), 1);
    }
}

#[test]
fn run_counting_joins_both_sides_of_the_origin() {
    let mut board = Board::new(18);
    for col in [0usize, 1, 3, 4] {
        board.set(7, col, Some(Player::Two)).unwrap();
    }
    // The origin's ownership is not re-checked, so counting through the gap
    // at (7, 2) reports the run a stone placed there would complete.
    assert_eq!(board.count_run(Player::Two, 7, 2, (0, 1)), 5);
}

#[test]
fn runs_stop_at_opponents_and_edges() {
    let mut board = Board::new(18);
    for row in 0..4 {
        board.set(row, 0, Some(Player::One)).unwrap();
    }
    board.set(4, 0, Some(Player::Two)).unwrap();
    assert_eq!(board.count_run(Player::One, 0, 0, (1, 0)), 4);
    assert_eq!(board.count_run(Player::One, 3, 0, (1, 0)), 4);
    assert_eq!(board.count_run(Player::Two, 4, 0, (1, 0)), 1);
}

#[test]
fn is_full_and_stone_counts() {
    let mut board = Board::new(2);
    assert!(!board.is_full());
    board.set(0, 0, Some(Player::One)).unwrap();
    board.set(0, 1, Some(Player::Two)).unwrap();
    board.set(1, 0, Some(Player::One)).unwrap();
    assert!(!board.is_full());
    board.set(1, 1, Some(Player::Two)).unwrap();
    assert!(board.is_full());
    assert_eq!(board.stones(Player::One), 2);
    assert_eq!(board.stones(Player::Two), 2);
}
