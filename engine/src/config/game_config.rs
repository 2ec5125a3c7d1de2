use serde::{Deserialize, Serialize};

use super::Validate;
use crate::game::Difficulty;

/// Pre-game settings the presentation layer collects before
/// `GameSession::start_game`. Name presence is a boundary rule, so it
/// is enforced here and not inside the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub x_player_name: String,
    pub o_player_name: String,
    pub multiplayer: bool,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            x_player_name: "Player X".to_string(),
            o_player_name: "Player O".to_string(),
            multiplayer: true,
            difficulty: Difficulty::Easy,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.x_player_name.trim().is_empty() {
            return Err("X player name must not be empty".to_string());
        }
        if self.multiplayer && self.o_player_name.trim().is_empty() {
            return Err("O player name must not be empty in multiplayer".to_string());
        }
        Ok(())
    }
}
