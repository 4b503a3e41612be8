//! Player view of game state - what information is visible to a player.

use serde::{Deserialize, Serialize};

use crate::domain::state::{Game, GameStatus, Player};

/// Viewer-relative summary of a game, for the transport collaborator to
/// render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub status: GameStatus,
    /// Display name of the player who made the most recent accepted move.
    pub who_made_last_move: Option<String>,
    pub last_move: Option<(usize, usize)>,
    pub your_turn: bool,
    /// Winner ordinal, once decided.
    pub winner: Option<u8>,
}

/// Build `viewer`'s view. Pure read; never mutates the game.
pub fn view_for(game: &Game, viewer: Player) -> GameView {
    GameView {
        status: game.status,
        who_made_last_move: game.last_player.map(|p| game.player_name(p).to_string()),
        last_move: game.last_move,
        your_turn: game.status.accepts_moves() && game.last_player != Some(viewer),
        winner: game.winner.map(Player::ordinal),
    }
}
