use crate::domain::moves::apply_move;
use crate::domain::player_view::view_for;
use crate::domain::state::{GameStatus, Player};
use crate::domain::test_state_helpers::{make_game, play_all, FIRST};

#[test]
fn fresh_game_is_anyones_turn() {
    let game = make_game(18);
    for viewer in [Player::One, Player::Two] {
        let view = view_for(&game, viewer);
        assert_eq!(view.status, GameStatus::InProgress);
        assert_eq!(view.who_made_last_move, None);
        assert_eq!(view.last_move, None);
        assert!(view.your_turn);
        assert_eq!(view.winner, None);
    }
}

#[test]
fn after_a_move_only_the_opponent_is_on_turn() {
    let mut game = make_game(18);
    apply_move(&mut game, Player::One, 5, 5).unwrap();

    let mover = view_for(&game, Player::One);
    assert!(!mover.your_turn);
    assert_eq!(mover.who_made_last_move, Some(FIRST.to_string()));
    assert_eq!(mover.last_move, Some((5, 5)));

    let opponent = view_for(&game, Player::Two);
    assert!(opponent.your_turn);
    assert_eq!(opponent.who_made_last_move, Some(FIRST.to_string()));
}

#[test]
fn terminal_games_put_nobody_on_turn() {
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

    for viewer in [Player::One, Player::Two] {
        let view = view_for(&game, viewer);
        assert_eq!(view.status, GameStatus::Won);
        assert!(!view.your_turn);
        assert_eq!(view.winner, Some(1));
    }
}
