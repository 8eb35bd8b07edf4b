use super::board::{Board, CELL_COUNT};
use super::types::{Mark, Outcome};

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

// Move policy for the computer, checked in order: take an immediate win,
// block the opponent's immediate win, otherwise search the full game tree.
// The block tier only covers a single threat; forked double threats fall
// through to the search, which still never loses.
pub fn best_move(board: &Board, computer: Mark) -> Option<usize> {
    let opponent = computer.opponent()?;

    let candidates = board.empty_cells();
    if candidates.is_empty() {
        return None;
    }

    let mut scratch = *board;

    for &index in &candidates {
        scratch.place(index, computer);
        let wins = scratch.evaluate() == Outcome::Win(computer);
        scratch.clear(index);
        if wins {
            return Some(index);
        }
    }

    for &index in &candidates {
        scratch.place(index, opponent);
        let loses = scratch.evaluate() == Outcome::Win(opponent);
        scratch.clear(index);
        if loses {
            return Some(index);
        }
    }

    let mut best_score = i32::MIN;
    let mut best_index = None;

    for &index in &candidates {
        scratch.place(index, computer);
        let score = minimax(&mut scratch, false, computer, i32::MIN, i32::MAX);
        scratch.clear(index);

        // strictly greater, so equal scores keep the earliest index
        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    best_index
}

fn minimax(board: &mut Board, is_maximizing: bool, computer: Mark, mut alpha: i32, mut beta: i32) -> i32 {
    match board.evaluate() {
        Outcome::Win(mark) => {
            return if mark == computer { WIN_SCORE } else { LOSS_SCORE };
        }
        Outcome::Draw => return DRAW_SCORE,
        Outcome::InProgress => {}
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if !board.is_valid_move(index) {
                continue;
            }

            board.place(index, computer);
            let eval = minimax(board, false, computer, alpha, beta);
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                return max_eval;
            }
        }
        max_eval
    } else {
        let opponent = computer.opponent().unwrap();
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if !board.is_valid_move(index) {
                continue;
            }

            board.place(index, opponent);
            let eval = minimax(board, true, computer, alpha, beta);
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                return min_eval;
            }
        }
        min_eval
    }
}
