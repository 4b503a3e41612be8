use serde::{Deserialize, Serialize};

use crate::domain::outcome::Outcome;
use crate::domain::state::{Game, GameId, GameStatus, Player};
use crate::services::scoring::ScoreAck;

/// Wire summary of a game, returned by the request-surface operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: GameId,
    pub first_player: String,
    pub second_player: String,
    pub status: GameStatus,
    pub last_move: Option<(usize, usize)>,
    pub who_made_last_move: Option<String>,
    pub winner: Option<u8>,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id,
            first_player: game.players[0].clone(),
            second_player: game.players[1].clone(),
            status: game.status,
            last_move: game.last_move,
            who_made_last_move: game.last_player.map(|p| game.player_name(p).to_string()),
            winner: game.winner.map(Player::ordinal),
        }
    }
}

/// Response body for a submitted move: the outcome code plus the summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub outcome: Outcome,
    pub message: String,
    pub game: GameSummary,
}

impl MoveResponse {
    pub fn new(outcome: Outcome, game: &Game) -> Self {
        Self {
            outcome,
            message: outcome.message().to_string(),
            game: game.into(),
        }
    }
}

/// Response body for an ended game: the outcome plus the scoring
/// collaborator's acknowledgement, passed through unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndGameResponse {
    pub outcome: Outcome,
    pub score: ScoreAck,
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;
    use uuid::Uuid;

    use super::*;
    use crate::domain::lifecycle::new_game;
    use crate::domain::moves::apply_move;

    #[test]
    fn move_response_serializes_with_wire_field_names() {
        let mut game = new_game(
            Uuid::nil(),
            "alice",
            "bob",
            18,
            OffsetDateTime::UNIX_EPOCH,
        );
        let outcome = apply_move(&mut game, Player::One, 4, 7).unwrap();
        let body = serde_json::to_value(MoveResponse::new(outcome, &game)).unwrap();

        assert_eq!(body["outcome"], "MOVED");
        assert_eq!(body["message"], "The player has moved");
        assert_eq!(body["game"]["firstPlayer"], "alice");
        assert_eq!(body["game"]["whoMadeLastMove"], "alice");
        assert_eq!(body["game"]["lastMove"][0], 4);
        assert_eq!(body["game"]["lastMove"][1], 7);
        assert!(body["game"]["gameId"].is_string());
    }

    #[test]
    fn end_game_response_passes_the_ack_through() {
        let body = serde_json::to_value(EndGameResponse {
            outcome: Outcome::Finished,
            score: ScoreAck {
                status: 200,
                message: "scored".to_string(),
            },
        })
        .unwrap();
        assert_eq!(body["outcome"], "FINISHED");
        assert_eq!(body["score"]["status"], 200);
        assert_eq!(body["score"]["message"], "scored");
    }
}
