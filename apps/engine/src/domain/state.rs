use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::board::Board;
use crate::domain::rules::PLAYERS;
use crate::errors::domain::{DomainError, ValidationKind};

pub type GameId = Uuid;

/// One of the two players, identified at the boundary by ordinal 1 or 2.
///
/// "No move yet" is `Option<Player>::None`; an ordinal of 0 is not
/// representable, so the first-move turn check needs no special case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Wire ordinal, 1-based.
    pub const fn ordinal(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = DomainError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(DomainError::validation(
                ValidationKind::InvalidPlayerOrdinal,
                format!("Player ordinal must be 1 or 2, got {other}"),
            )),
        }
    }
}

/// Overall game progression states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Accepting moves.
    InProgress,
    /// A run reached the winning length. Terminal for moves.
    Won,
    /// Board filled with no winner. Terminal for moves.
    Draw,
    /// Record finalized by an explicit end request. Terminal.
    Finished,
}

impl GameStatus {
    pub const fn accepts_moves(self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

/// Entire game container, sufficient for pure domain operations.
///
/// This is also the document shape the persistence collaborator stores; the
/// domain itself never reads a clock or touches `lock_version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    /// Display names in seat order; move operations identify players by
    /// ordinal, never by name.
    pub players: [String; PLAYERS],
    /// Owned exclusively by this game; never shared across games.
    pub board: Board,
    /// Player who made the most recent accepted move; `None` before any move.
    pub last_player: Option<Player>,
    /// Most recent accepted move, scoping win detection to the affected cell.
    pub last_move: Option<(usize, usize)>,
    pub winner: Option<Player>,
    pub status: GameStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    /// Bumped by the persistence adapter on every update.
    pub lock_version: i32,
}

impl Game {
    pub fn player_name(&self, player: Player) -> &str {
        &self.players[(player.ordinal() - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_conversion_accepts_only_one_and_two() {
        assert_eq!(Player::try_from(1).unwrap(), Player::One);
        assert_eq!(Player::try_from(2).unwrap(), Player::Two);
        for bad in [0u8, 3, 255] {
            let err = Player::try_from(bad).unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::InvalidPlayerOrdinal, _)
            ));
        }
    }

    #[test]
    fn opponents_are_symmetric() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }
}
