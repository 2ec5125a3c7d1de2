use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Empty => " ",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// Winning player plus the exact line of cell indices that won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinResult {
    pub mark: Mark,
    pub line: [usize; 3],
}

impl WinResult {
    pub fn new(mark: Mark, line: [usize; 3]) -> Self {
        Self { mark, line }
    }
}

/// Session phase. `Finished(None)` is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished(Option<WinResult>),
}

/// Display labels for the two sides. Never consulted by game logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl PlayerNames {
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    pub fn for_mark(&self, mark: Mark) -> &str {
        match mark {
            Mark::O => &self.o,
            _ => &self.x,
        }
    }
}
