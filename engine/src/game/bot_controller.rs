use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

/// The bot always plays the O side.
pub const BOT_MARK: Mark = Mark::O;

/// Picks the bot's cell for the given difficulty. Returns `None` only
/// when the board has no empty cell, which the session never allows to
/// happen: a full board is already `Finished` before the bot is asked.
pub fn calculate_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => calculate_medium_move(board, rng),
        Difficulty::Hard => calculate_hard_move(board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Plays a winning move for O when one exists, otherwise random.
///
/// Note: this tier does not block X. The original advertised it as a
/// blocking heuristic but simulated O's own win, and that literal
/// behavior is kept.
fn calculate_medium_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.empty_cells();
    if let Some(index) = find_winning_move(board, BOT_MARK, &available_moves) {
        return Some(index);
    }
    calculate_random_move(board, rng)
}

/// Win if possible, else block X's immediate win, else random.
fn calculate_hard_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.empty_cells();

    if let Some(index) = find_winning_move(board, BOT_MARK, &available_moves) {
        return Some(index);
    }

    let opponent = BOT_MARK.opponent().unwrap_or(Mark::X);
    if let Some(index) = find_winning_move(board, opponent, &available_moves) {
        return Some(index);
    }

    calculate_random_move(board, rng)
}

/// First cell, in ascending index order, where placing `mark` completes
/// a line for `mark`.
fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        let candidate = board.with_mark(index, mark);
        if check_win(&candidate).map(|win| win.mark) == Some(mark) {
            return Some(index);
        }
    }
    None
}
