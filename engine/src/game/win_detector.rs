use super::board::{Board, LINES};
use super::types::{Mark, WinResult};

/// Scans the 8 lines in fixed order and returns the first one fully
/// occupied by a single player, together with that player's mark.
pub fn check_win(board: &Board) -> Option<WinResult> {
    for line in LINES {
        let [a, b, c] = line;
        let mark = board.cell(a);
        if mark == Mark::Empty {
            continue;
        }
        if board.cell(b) == mark && board.cell(c) == mark {
            return Some(WinResult::new(mark, line));
        }
    }
    None
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}
