//! Collaborator ports consumed by the service layer.

pub mod games;

pub use games::{require_game, GameRepo};
