use serde::{Deserialize, Serialize};
use std::fmt;

/// Every line that wins the game: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub const CELL_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Decided result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Nine cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board([Option<Player>; CELL_COUNT]);

impl Board {
    pub fn new() -> Self {
        Board([None; CELL_COUNT])
    }

    pub fn get(&self, cell: usize) -> Option<Player> {
        self.0.get(cell).copied().flatten()
    }

    pub fn is_empty_cell(&self, cell: usize) -> bool {
        cell < CELL_COUNT && self.0[cell].is_none()
    }

    pub(crate) fn set(&mut self, cell: usize, player: Player) {
        self.0[cell] = Some(player);
    }

    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.0
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| cell.is_some())
    }

    pub fn count(&self, player: Player) -> usize {
        self.0.iter().filter(|&&cell| cell == Some(player)).count()
    }

    /// First line in [`WINNING_LINES`] holding three equal marks.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        WINNING_LINES.into_iter().find(|&[a, b, c]| {
            self.0[a].is_some() && self.0[a] == self.0[b] && self.0[b] == self.0[c]
        })
    }
}

impl From<[Option<Player>; CELL_COUNT]> for Board {
    fn from(cells: [Option<Player>; CELL_COUNT]) -> Self {
        Board(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.0[row * 3 + col] {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, ".")?,
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Win if any line is complete, draw if the board is full, otherwise `None`.
pub fn evaluate_outcome(board: &Board) -> Option<Outcome> {
    if let Some([a, _, _]) = board.winning_line() {
        return board.get(a).map(Outcome::Win);
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}
