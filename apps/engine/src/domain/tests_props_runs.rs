/// Property-based tests for run counting and move rejection invariants.
use proptest::prelude::*;

use crate::domain::board::Board;
use crate::domain::moves::apply_move;
use crate::domain::outcome::Outcome;
use crate::domain::rules::WIN_RUN;
use crate::domain::test_gens;
use crate::domain::test_state_helpers::make_game;

proptest! {
    /// An isolated stone is a run of exactly one in every direction.
    #[test]
    fn prop_isolated_stone_run_is_one(
        (row, col) in test_gens::coord(18),
        who in test_gens::player(),
        dir in test_gens::direction(),
    ) {
        let mut board = Board::new(18);
        board.set(row, col, Some(who)).unwrap();
        prop_assert_eq!(board.count_run(who, row, col, dir), 1);
    }

    /// A gapless line of `len` stones counts `len` from every member cell,
    /// so it never matters which end of a run was completed last.
    #[test]
    fn prop_line_counts_its_length_from_any_member(
        who in test_gens::player(),
        dir in test_gens::direction(),
        len in 1usize..=WIN_RUN,
    ) {
        // Anchor at (8, 8): a five-long line fits the 18x18 board in every
        // listed direction, including the column-decreasing diagonal.
        let mut board = Board::new(18);
        let cell = |i: usize| {
            (
                (8 + i as isize * dir.0 as isize) as usize,
                (8 + i as isize * dir.1 as isize) as usize,
            )
        };
        for i in 0..len {
            let (r, c) = cell(i);
            board.set(r, c, Some(who)).unwrap();
        }
        for i in 0..len {
            let (r, c) = cell(i);
            prop_assert_eq!(board.count_run(who, r, c, dir), len);
        }
    }

    /// Rejected moves never mutate the game.
    #[test]
    fn prop_rejections_leave_the_game_unchanged(
        (first_row, first_col) in test_gens::coord(18),
        (second_row, second_col) in test_gens::coord(18),
        who in test_gens::player(),
    ) {
        let mut game = make_game(18);
        apply_move(&mut game, who, first_row, first_col).unwrap();
        let before = game.clone();

        // The same player again is always out of turn.
        prop_assert_eq!(
            apply_move(&mut game, who, second_row, second_col).unwrap(),
            Outcome::OutOfTurn
        );
        // The opponent onto the taken cell is always occupied.
        prop_assert_eq!(
            apply_move(&mut game, who.opponent(), first_row, first_col).unwrap(),
            Outcome::CellOccupied
        );
        prop_assert_eq!(&game, &before);
    }
}
