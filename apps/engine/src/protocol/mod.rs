//! Boundary contracts for the excluded transport layer.

pub mod game_summary;
pub mod response;

pub use game_summary::{EndGameResponse, GameSummary, MoveResponse};
pub use response::ResponseClass;
