// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::state::Player;

/// Generate a random Player
pub fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::One), Just(Player::Two)]
}

/// Generate one of the four run-counting axis directions
pub fn direction() -> impl Strategy<Value = (i8, i8)> {
    prop_oneof![Just((1, 0)), Just((0, 1)), Just((1, 1)), Just((1, -1))]
}

/// Generate a coordinate pair within a `size`-dimension board
pub fn coord(size: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..size, 0..size)
}
