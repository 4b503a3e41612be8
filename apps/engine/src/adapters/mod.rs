//! Collaborator implementations backing the repository ports.

pub mod games_mem;

pub use games_mem::GameRepoMem;
