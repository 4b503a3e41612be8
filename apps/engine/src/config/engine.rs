//! Engine configuration.
//!
//! The board dimension is fixed at configuration time; games never vary it
//! afterwards.

use std::env;

use thiserror::Error;

use crate::domain::rules::{valid_board_sizes, DEFAULT_BOARD_SIZE};

/// Environment variable overriding the board dimension.
pub const BOARD_SIZE_VAR: &str = "ENGINE_BOARD_SIZE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ENGINE_BOARD_SIZE must be an integer, got '{raw}'")]
    InvalidBoardSize { raw: String },
    #[error("board size {size} outside supported range {min}..={max}")]
    BoardSizeOutOfRange {
        size: usize,
        min: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub board_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn new(board_size: usize) -> Result<Self, ConfigError> {
        let range = valid_board_sizes();
        if !range.contains(&board_size) {
            return Err(ConfigError::BoardSizeOutOfRange {
                size: board_size,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(Self { board_size })
    }

    /// Reads `ENGINE_BOARD_SIZE`; unset means the default dimension.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BOARD_SIZE_VAR) {
            Ok(raw) => Self::new(parse_board_size(&raw)?),
            Err(_) => Ok(Self::default()),
        }
    }
}

fn parse_board_size(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidBoardSize {
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::WIN_RUN;

    #[test]
    fn default_dimension_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, DEFAULT_BOARD_SIZE);
        assert!(EngineConfig::new(config.board_size).is_ok());
    }

    #[test]
    fn dimensions_below_the_winning_run_are_rejected() {
        let err = EngineConfig::new(WIN_RUN - 1).unwrap_err();
        assert!(matches!(err, ConfigError::BoardSizeOutOfRange { .. }));
        assert!(EngineConfig::new(WIN_RUN).is_ok());
    }

    #[test]
    fn from_env_falls_back_to_the_default() {
        // No other test touches the variable, so this stays race-free.
        std::env::remove_var(BOARD_SIZE_VAR);
        assert_eq!(EngineConfig::from_env(), Ok(EngineConfig::default()));
    }

    #[test]
    fn board_size_parsing_rejects_garbage() {
        assert_eq!(parse_board_size("18"), Ok(18));
        assert_eq!(parse_board_size(" 18 "), Ok(18));
        assert!(matches!(
            parse_board_size("eighteen"),
            Err(ConfigError::InvalidBoardSize { .. })
        ));
        assert!(matches!(
            parse_board_size("-1"),
            Err(ConfigError::InvalidBoardSize { .. })
        ));
    }
}
