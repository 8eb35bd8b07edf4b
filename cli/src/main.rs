mod config;
mod screen;

use clap::Parser;
use config::Config;
use engine::config::YamlConfigFile;
use engine::game::CELL_COUNT;
use engine::{GameState, Outcome, best_move, log, logger};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "tic_tac_toe_cli")]
struct Args {
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

enum MenuChoice {
    SinglePlayer,
    TwoPlayer,
    Quit,
}

enum EndChoice {
    PlayAgain,
    Menu,
    Quit,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config: Config = YamlConfigFile::new(&args.config).load()?;
    let bot_delay = Duration::from_millis(config.bot_move_delay_ms);
    log!("Computer move delay is {} ms", config.bot_move_delay_ms);

    'menu: loop {
        let single_player = match select_mode()? {
            MenuChoice::SinglePlayer => true,
            MenuChoice::TwoPlayer => false,
            MenuChoice::Quit => break,
        };

        let player1 = screen::prompt("Player 1 name: ")?;
        let player2 = if single_player {
            String::new()
        } else {
            screen::prompt("Player 2 name: ")?
        };

        let mut state = GameState::start(&player1, &player2, single_player);
        log!(
            "Game started: {} (X) vs {} (O)",
            state.players()[0].name,
            state.players()[1].name
        );

        loop {
            let outcome = play_round(&mut state, bot_delay).await?;
            if let Some(status) = screen::outcome_status(&state, outcome) {
                println!("{}", status);
            }

            match select_end_action()? {
                EndChoice::PlayAgain => state.reset(),
                EndChoice::Menu => continue 'menu,
                EndChoice::Quit => break 'menu,
            }
        }
    }

    log!("Goodbye");
    Ok(())
}

async fn play_round(
    state: &mut GameState,
    bot_delay: Duration,
) -> Result<Outcome, Box<dyn std::error::Error>> {
    let mut outcome = Outcome::InProgress;

    while state.is_active() {
        println!();
        screen::render_board(state.board());

        let player = state.active_player().clone();
        let index = if player.is_computer {
            println!("{}", screen::turn_status(state));
            tokio::time::sleep(bot_delay).await;

            let board = *state.board();
            let chosen =
                tokio::task::spawn_blocking(move || best_move(&board, player.mark)).await?;
            let Some(index) = chosen else {
                break;
            };
            log!("Computer plays cell {}", index);
            index
        } else {
            prompt_human_move(state)?
        };

        outcome = state.apply_move(index);
    }

    println!();
    screen::render_board(state.board());
    Ok(outcome)
}

// Re-prompts until the input addresses a free cell; the engine never sees
// an ineligible move.
fn prompt_human_move(state: &GameState) -> Result<usize, String> {
    loop {
        let text = format!("{} - cell (0-8): ", screen::turn_status(state));
        let input = screen::prompt(&text)?;

        match input.parse::<usize>() {
            Ok(index) if state.board().is_valid_move(index) => return Ok(index),
            Ok(index) if index < CELL_COUNT => println!("Cell {} is already taken.", index),
            _ => println!("Please enter a free cell index between 0 and 8."),
        }
    }
}

fn select_mode() -> Result<MenuChoice, String> {
    loop {
        println!();
        println!("=== Tic-Tac-Toe ===");
        println!("1) Single player");
        println!("2) Two players");
        println!("q) Quit");

        let input = screen::prompt("> ")?;
        match input.as_str() {
            "1" => return Ok(MenuChoice::SinglePlayer),
            "2" => return Ok(MenuChoice::TwoPlayer),
            "q" | "Q" => return Ok(MenuChoice::Quit),
            _ => println!("Please enter 1, 2 or q."),
        }
    }
}

fn select_end_action() -> Result<EndChoice, String> {
    loop {
        println!("r) Play again   m) Back to menu   q) Quit");

        let input = screen::prompt("> ")?;
        match input.as_str() {
            "r" | "R" => return Ok(EndChoice::PlayAgain),
            "m" | "M" => return Ok(EndChoice::Menu),
            "q" | "Q" => return Ok(EndChoice::Quit),
            _ => println!("Please enter r, m or q."),
        }
    }
}
