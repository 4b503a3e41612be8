#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod protocol;
pub mod repos;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::games_mem::GameRepoMem;
pub use config::engine::{ConfigError, EngineConfig};
pub use domain::board::Board;
pub use domain::lifecycle::{finish_game, new_game};
pub use domain::moves::{apply_move, winning_run};
pub use domain::outcome::Outcome;
pub use domain::player_view::{view_for, GameView};
pub use domain::scoring::{score_request, ScoreRequest};
pub use domain::state::{Game, GameId, GameStatus, Player};
pub use errors::domain::DomainError;
pub use errors::error_code::ErrorCode;
pub use protocol::response::ResponseClass;
pub use repos::games::{require_game, GameRepo};
pub use services::games::GamesService;
pub use services::scoring::{ScoreAck, ScoreReporter};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
