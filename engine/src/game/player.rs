use super::types::Mark;

pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";
pub const COMPUTER_NAME: &str = "Computer";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub mark: Mark,
    pub is_computer: bool,
}

impl Player {
    pub fn human(name: &str, fallback: &str, mark: Mark) -> Self {
        let name = if name.is_empty() { fallback } else { name };
        Self {
            name: name.to_string(),
            mark,
            is_computer: false,
        }
    }

    pub fn computer(mark: Mark) -> Self {
        Self {
            name: COMPUTER_NAME.to_string(),
            mark,
            is_computer: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_keeps_given_name() {
        let player = Player::human("Alice", DEFAULT_PLAYER1_NAME, Mark::X);

        assert_eq!(player.name, "Alice");
        assert_eq!(player.mark, Mark::X);
        assert!(!player.is_computer);
    }

    #[test]
    fn test_human_empty_name_falls_back() {
        let player = Player::human("", DEFAULT_PLAYER2_NAME, Mark::O);

        assert_eq!(player.name, "Player 2");
    }

    #[test]
    fn test_computer_is_flagged_and_named() {
        let player = Player::computer(Mark::O);

        assert_eq!(player.name, "Computer");
        assert!(player.is_computer);
    }
}
