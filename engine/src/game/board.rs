use super::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// The 8 winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Immutable 3x3 board snapshot. A move produces a new `Board`;
/// existing snapshots in the history are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }
}

impl Board {
    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        index < BOARD_CELLS && self.cells[index] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// New snapshot with `mark` placed at `index`. Caller validates the cell.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut cells = self.cells;
        cells[index] = mark;
        Board { cells }
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.is_empty_at(index)
}
