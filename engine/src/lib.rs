pub mod config;
pub mod game;
pub mod logger;

pub use game::{Board, GameState, Mark, Outcome, Player, best_move};
