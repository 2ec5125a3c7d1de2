mod board;
mod bot_controller;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board, LINES, is_valid_move};
pub use bot_controller::{BOT_MARK, calculate_move};
pub use session::{DEFAULT_BOT_NAME, GameSession};
pub use session_rng::SessionRng;
pub use types::{Difficulty, GamePhase, Mark, PlayerNames, WinResult};
pub use win_detector::{check_win, is_draw};
