use engine::{Board, GameState, Mark, Outcome};
use std::io::{self, Write};

// Empty cells render as their index so the player can address them.
pub fn render_board(board: &Board) {
    let cells = board.cells();
    for row in 0..3 {
        let rendered: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match cells[index] {
                    Mark::Empty => index.to_string(),
                    mark => mark.to_string(),
                }
            })
            .collect();

        println!(" {} | {} | {}", rendered[0], rendered[1], rendered[2]);
        if row < 2 {
            println!("---+---+---");
        }
    }
}

pub fn turn_status(state: &GameState) -> String {
    let player = state.active_player();
    format!("{}'s turn ({})", player.name, player.mark)
}

pub fn outcome_status(state: &GameState, outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Win(mark) => state
            .player_for(mark)
            .map(|winner| format!("{} wins!", winner.name)),
        Outcome::Draw => Some("Good Game! It's a draw.".to_string()),
        Outcome::InProgress => None,
    }
}

pub fn prompt(text: &str) -> Result<String, String> {
    print!("{}", text);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if bytes == 0 {
        return Err("Input stream closed".to_string());
    }

    Ok(line.trim().to_string())
}
