use std::fmt;

use super::patterns::FULL_BOARD;
use super::Player;
use crate::error::{MoveError, StateError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Mask of the single cell at `row`, `col`. Row 0 is the top.
#[inline]
pub const fn cell_mask(row: usize, col: usize) -> u64 {
    1 << (row * COLS + col)
}

/// A Connect Four position as one bitmask per side.
///
/// Bit `row * 7 + col` is set in `red` (or `yellow`) when that side owns the
/// cell. The two masks never overlap. Boards are values: a move returns a new
/// board and leaves the old one alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    red: u64,
    yellow: u64,
}

impl Board {
    /// Create a new empty board
    pub const fn new() -> Self {
        Board { red: 0, yellow: 0 }
    }

    /// Build a board from raw masks, rejecting shared or off-grid cells.
    pub fn from_masks(red: u64, yellow: u64) -> Result<Self, StateError> {
        if red & yellow != 0 {
            return Err(StateError::Overlap { red, yellow });
        }
        let union = red | yellow;
        if union & !FULL_BOARD != 0 {
            return Err(StateError::OutOfGrid { mask: union });
        }
        Ok(Board { red, yellow })
    }

    pub fn red(&self) -> u64 {
        self.red
    }

    pub fn yellow(&self) -> u64 {
        self.yellow
    }

    /// Mask owned by `player`.
    pub fn mask(&self, player: Player) -> u64 {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    /// Every occupied cell.
    pub fn occupied(&self) -> u64 {
        self.red | self.yellow
    }

    /// Same position with the two sides swapped.
    pub fn swapped(&self) -> Self {
        Board {
            red: self.yellow,
            yellow: self.red,
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        let bit = cell_mask(row, col);
        if self.red & bit != 0 {
            Cell::Red
        } else if self.yellow & bit != 0 {
            Cell::Yellow
        } else {
            Cell::Empty
        }
    }

    /// A column accepts a piece while its top cell is empty.
    pub fn is_legal(&self, col: usize) -> bool {
        col < COLS && self.occupied() & cell_mask(0, col) == 0
    }

    /// Columns that still accept a piece, in ascending order.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.is_legal(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.occupied() == FULL_BOARD
    }

    /// Row a piece dropped into `col` would land on, if the column has room.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if !self.is_legal(col) {
            return None;
        }
        let occupied = self.occupied();
        // The piece stops above the first occupied cell below row 0.
        for row in 1..ROWS {
            if occupied & cell_mask(row, col) != 0 {
                return Some(row - 1);
            }
        }
        Some(ROWS - 1)
    }

    /// Drop a piece for `player` into `col` and return the resulting board.
    pub fn apply_move(&self, col: usize, player: Player) -> Result<Board, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        let bit = cell_mask(row, col);

        Ok(match player {
            Player::Red => Board {
                red: self.red | bit,
                yellow: self.yellow,
            },
            Player::Yellow => Board {
                red: self.red,
                yellow: self.yellow | bit,
            },
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        writeln!(f, "{}", header.join(" "))?;
        for row in 0..ROWS {
            let line: Vec<&str> = (0..COLS)
                .map(|col| match self.get(row, col) {
                    Cell::Red => "X",
                    Cell::Yellow => "O",
                    Cell::Empty => "_",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
