use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::game::{
    Board, Difficulty, GamePhase, GameSession, Mark, SessionRng, calculate_move,
};

fn bench_hard_move_empty_board() {
    let board = Board::default();
    let mut rng = SessionRng::from_random();
    calculate_move(&board, Difficulty::Hard, &mut rng);
}

fn bench_hard_move_mid_game() {
    let board = Board::default()
        .with_mark(0, Mark::X)
        .with_mark(4, Mark::O)
        .with_mark(8, Mark::X)
        .with_mark(2, Mark::O)
        .with_mark(6, Mark::X);
    let mut rng = SessionRng::from_random();
    calculate_move(&board, Difficulty::Hard, &mut rng);
}

fn bench_full_bot_game() {
    let mut session = GameSession::new(SessionRng::from_random());
    session
        .start_game("X", "", false, Difficulty::Hard)
        .unwrap();
    while session.phase() == GamePhase::InProgress {
        let index = match session.current_board().empty_cells().first() {
            Some(&index) => index,
            None => break,
        };
        if session.play_move(index).is_err() {
            break;
        }
    }
}

fn bot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot");

    group.bench_function("hard_move_empty", |b| b.iter(bench_hard_move_empty_board));

    group.bench_function("hard_move_mid_game", |b| b.iter(bench_hard_move_mid_game));

    group.bench_function("full_game_vs_hard", |b| b.iter(bench_full_bot_game));

    group.finish();
}

criterion_group!(benches, bot_bench);
criterion_main!(benches);
