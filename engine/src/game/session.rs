use crate::log;

use super::board::Board;
use super::bot_controller::{BOT_MARK, calculate_move};
use super::session_rng::SessionRng;
use super::types::{Difficulty, GamePhase, Mark, PlayerNames, WinResult};
use super::win_detector::check_win;

pub const DEFAULT_BOT_NAME: &str = "Bot";

/// Owns the move history and orchestrates turn alternation between a
/// human X and either a human O or the bot.
///
/// All mutation goes through `start_game`, `play_move`, `jump_to` and
/// `reset_game`; each runs to completion before the caller sees the
/// next state, including the bot reply that follows a human move.
pub struct GameSession {
    history: Vec<Board>,
    current_move: usize,
    phase: GamePhase,
    names: PlayerNames,
    multiplayer: bool,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionRng::from_random())
    }
}

impl GameSession {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            history: vec![Board::default()],
            current_move: 0,
            phase: GamePhase::NotStarted,
            names: PlayerNames::new("Player X", "Player O"),
            multiplayer: true,
            difficulty: Difficulty::Easy,
            rng,
        }
    }

    pub fn start_game(
        &mut self,
        x_name: &str,
        o_name: &str,
        multiplayer: bool,
        difficulty: Difficulty,
    ) -> Result<(), String> {
        if self.phase != GamePhase::NotStarted {
            return Err("Game is already running".to_string());
        }

        // The O name field is disabled in bot mode; substitute a label.
        let o_name = if !multiplayer && o_name.is_empty() {
            DEFAULT_BOT_NAME
        } else {
            o_name
        };

        self.history = vec![Board::default()];
        self.current_move = 0;
        self.names = PlayerNames::new(x_name, o_name);
        self.multiplayer = multiplayer;
        self.difficulty = difficulty;
        self.phase = GamePhase::InProgress;
        Ok(())
    }

    /// Applies a human move at `index`, then the bot reply when in bot
    /// mode. Invalid moves leave the session untouched.
    pub fn play_move(&mut self, index: usize) -> Result<(), String> {
        self.apply_move(index)?;
        self.play_bot_turn_if_due();
        Ok(())
    }

    /// Moves the history pointer to snapshot `target`. In multiplayer
    /// the discarded future stays in the history until the next
    /// `play_move` truncates it. In bot mode a jump that leaves O to
    /// move gets an immediate bot reply, which truncates and rebuilds
    /// the history from `target`; the human is never left playing O.
    pub fn jump_to(&mut self, target: usize) -> Result<(), String> {
        if self.phase == GamePhase::NotStarted {
            return Err("Game has not started".to_string());
        }
        if target >= self.history.len() {
            return Err(format!(
                "No move {} in a {}-move history",
                target,
                self.history.len() - 1
            ));
        }
        self.current_move = target;
        self.phase = self.derive_phase(&self.history[target]);
        self.play_bot_turn_if_due();
        Ok(())
    }

    pub fn reset_game(&mut self) {
        self.history = vec![Board::default()];
        self.current_move = 0;
        self.phase = GamePhase::NotStarted;
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    pub fn multiplayer(&self) -> bool {
        self.multiplayer
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Even pointer means X to move.
    pub fn mark_to_move(&self) -> Mark {
        if self.current_move % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.phase {
            GamePhase::Finished(Some(win)) => Some(win.line),
            _ => None,
        }
    }

    pub fn status_text(&self) -> String {
        match self.phase {
            GamePhase::NotStarted => "Game not started".to_string(),
            GamePhase::Finished(Some(win)) => {
                format!("Winner: {}", self.names.for_mark(win.mark))
            }
            GamePhase::Finished(None) => "It's a Draw!".to_string(),
            GamePhase::InProgress => {
                format!("Next Player: {}", self.names.for_mark(self.mark_to_move()))
            }
        }
    }

    fn apply_move(&mut self, index: usize) -> Result<(), String> {
        match self.phase {
            GamePhase::NotStarted => return Err("Game has not started".to_string()),
            GamePhase::Finished(_) => return Err("Game is already over".to_string()),
            GamePhase::InProgress => {}
        }

        let board = self.current_board();
        if !board.is_empty_at(index) {
            return Err(format!("Cell {} is not available", index));
        }

        let next_board = board.with_mark(index, self.mark_to_move());

        // Branching from an earlier snapshot discards the old future.
        self.history.truncate(self.current_move + 1);
        self.history.push(next_board);
        self.current_move += 1;
        self.phase = self.derive_phase(&next_board);
        Ok(())
    }

    /// Fires at most once per human move: after the bot's reply the
    /// side to move is X again and the guard no longer holds.
    fn play_bot_turn_if_due(&mut self) {
        if self.multiplayer
            || self.phase != GamePhase::InProgress
            || self.mark_to_move() != BOT_MARK
        {
            return;
        }

        let board = *self.current_board();
        let Some(index) = calculate_move(&board, self.difficulty, &mut self.rng) else {
            // A full board is Finished before the bot is consulted.
            return;
        };

        if let Err(e) = self.apply_move(index) {
            log!("Bot failed to place mark at {}: {}", index, e);
        }
    }

    fn derive_phase(&self, board: &Board) -> GamePhase {
        if let Some(win) = check_win(board) {
            GamePhase::Finished(Some(win))
        } else if board.is_full() {
            GamePhase::Finished(None)
        } else {
            GamePhase::InProgress
        }
    }

    pub fn winner(&self) -> Option<WinResult> {
        match self.phase {
            GamePhase::Finished(result) => result,
            _ => None,
        }
    }
}
