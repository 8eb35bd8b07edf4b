use super::board::Board;
use super::player::{DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, Player};
use super::types::{Mark, Outcome};

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    active: usize,
    is_active: bool,
}

impl GameState {
    pub fn start(player1_name: &str, player2_name: &str, single_player: bool) -> Self {
        let first = Player::human(player1_name, DEFAULT_PLAYER1_NAME, Mark::X);
        let second = if single_player {
            Player::computer(Mark::O)
        } else {
            Player::human(player2_name, DEFAULT_PLAYER2_NAME, Mark::O)
        };

        Self {
            board: Board::new(),
            players: [first, second],
            active: 0,
            is_active: true,
        }
    }

    // Occupied cells, out-of-range indices and finished games are caller
    // preconditions, rejected as a silent no-op rather than an error.
    pub fn apply_move(&mut self, index: usize) -> Outcome {
        if !self.is_active || !self.board.is_valid_move(index) {
            return self.board.evaluate();
        }

        self.board.place(index, self.players[self.active].mark);

        let outcome = self.board.evaluate();
        match outcome {
            Outcome::InProgress => self.active = 1 - self.active,
            Outcome::Win(_) | Outcome::Draw => self.is_active = false,
        }

        outcome
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.active = 0;
        self.is_active = true;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn player_for(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|player| player.mark == mark)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
