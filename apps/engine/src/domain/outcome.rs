use core::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of result tags an engine operation returns.
///
/// Rule violations are outcomes, not errors: the game is unchanged and the
/// tag is relayed to the end user as-is. Only malformed input (out-of-range
/// coordinates, bad ordinals) is a `DomainError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Legal move accepted; the game continues.
    Moved,
    /// The move completed a winning run. Terminal.
    Won,
    /// The move filled the last cell with no winner. Terminal.
    Draw,
    /// The acting player also made the previous move.
    OutOfTurn,
    /// The target cell already holds a stone.
    CellOccupied,
    /// The game no longer accepts moves.
    GameFinished,
    /// The record was finalized by an explicit end request.
    Finished,
}

impl Outcome {
    /// Canonical SCREAMING_SNAKE_CASE code relayed at the boundary.
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Moved => "MOVED",
            Outcome::Won => "WON",
            Outcome::Draw => "DRAW",
            Outcome::OutOfTurn => "OUT_OF_TURN",
            Outcome::CellOccupied => "CELL_OCCUPIED",
            Outcome::GameFinished => "GAME_FINISHED",
            Outcome::Finished => "FINISHED",
        }
    }

    /// Human-readable message relayed to the end user.
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Moved => "The player has moved",
            Outcome::Won => "The game is won",
            Outcome::Draw => "The game ends in a draw",
            Outcome::OutOfTurn => "This user already moved",
            Outcome::CellOccupied => "This is not an empty square",
            Outcome::GameFinished => "The game is finished",
            Outcome::Finished => "The game is finished",
        }
    }

    /// True when the move was rejected and no state changed.
    pub const fn is_rejection(self) -> bool {
        matches!(
            self,
            Outcome::OutOfTurn | Outcome::CellOccupied | Outcome::GameFinished
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ALL: [Outcome; 7] = [
        Outcome::Moved,
        Outcome::Won,
        Outcome::Draw,
        Outcome::OutOfTurn,
        Outcome::CellOccupied,
        Outcome::GameFinished,
        Outcome::Finished,
    ];

    #[test]
    fn codes_are_unique() {
        let strings: HashSet<&'static str> = ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(strings.len(), ALL.len());
    }

    #[test]
    fn serde_representation_matches_the_code() {
        for outcome in ALL {
            let value = serde_json::to_value(outcome).unwrap();
            assert_eq!(value, serde_json::Value::String(outcome.as_str().into()));
        }
    }

    #[test]
    fn only_rule_violations_are_rejections() {
        assert!(Outcome::OutOfTurn.is_rejection());
        assert!(Outcome::CellOccupied.is_rejection());
        assert!(Outcome::GameFinished.is_rejection());
        assert!(!Outcome::Moved.is_rejection());
        assert!(!Outcome::Won.is_rejection());
        assert!(!Outcome::Draw.is_rejection());
        assert!(!Outcome::Finished.is_rejection());
    }
}
