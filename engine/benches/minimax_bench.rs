use criterion::{Criterion, criterion_group, criterion_main};
use engine::{Board, GameState, Mark, best_move};

fn bench_search_empty_board(c: &mut Criterion) {
    c.bench_function("best_move_empty_board", |b| {
        b.iter(|| {
            let board = Board::new();
            best_move(&board, Mark::X)
        });
    });
}

fn bench_search_mid_game(c: &mut Criterion) {
    c.bench_function("best_move_mid_game", |b| {
        // Three plies in, no immediate threats, so the minimax tier runs.
        let mut state = GameState::start("", "", true);
        for index in [4, 0, 8] {
            state.apply_move(index);
        }
        let board = *state.board();

        b.iter(|| best_move(&board, Mark::O));
    });
}

fn bench_search_full_self_play(c: &mut Criterion) {
    c.bench_function("best_move_full_self_play", |b| {
        b.iter(|| {
            let mut state = GameState::start("", "", true);
            while state.is_active() {
                let mark = state.active_player().mark;
                if let Some(index) = best_move(state.board(), mark) {
                    state.apply_move(index);
                } else {
                    break;
                }
            }
            state.board().evaluate()
        });
    });
}

criterion_group!(
    benches,
    bench_search_empty_board,
    bench_search_mid_game,
    bench_search_full_self_play
);
criterion_main!(benches);
