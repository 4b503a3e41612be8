//! Orchestration around the pure rules engine.

pub mod games;
pub mod scoring;

pub use games::GamesService;
pub use scoring::{ScoreAck, ScoreReporter};
