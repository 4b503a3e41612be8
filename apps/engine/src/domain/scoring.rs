use serde::{Deserialize, Serialize};

use crate::domain::state::{Game, Player};

/// Input contract of the external scoring collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub player: String,
    /// Stones the player holds on the board, i.e. their accepted move count.
    pub moves: u32,
}

/// Scoring input for `who`: their display name and placed-stone count.
pub fn score_request(game: &Game, who: Player) -> ScoreRequest {
    ScoreRequest {
        player: game.player_name(who).to_string(),
        moves: game.board.stones(who) as u32,
    }
}
