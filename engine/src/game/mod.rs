mod board;
mod bot;
mod player;
mod state;
mod types;

pub use board::{Board, CELL_COUNT, WIN_LINES};
pub use bot::best_move;
pub use player::Player;
pub use state::GameState;
pub use types::{Mark, Outcome};
