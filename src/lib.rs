// Library interface for forcad
// Shared by the forcad server, the forca terminal client, and the
// integration tests

pub mod game;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use game::{GameSession, GameState, MAX_ERRORS};
pub use models::{Difficulty, GeneratedWord};
