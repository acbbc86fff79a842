//! The 81-cell board and its copy-on-write assignment primitive.

use std::{
    fmt::{self, Display, Formatter, Write as _},
    str::FromStr,
};

use crate::{
    cell::Cell,
    error::ParseBoardError,
    index::{DIM, DIM2, PEERS, SIZE, index_of},
};

/// A 9×9 Sudoku board of 81 [`Cell`]s, addressed by linear index
/// `row * 9 + col`.
///
/// Boards have plain value semantics: [`set`](Board::set) consumes a copy
/// and returns a fresh board, leaving the original untouched. This
/// copy-on-write discipline is what makes the backtracking search safe
/// without an undo log; sibling branches never observe each other's
/// tentative state.
///
/// # Examples
///
/// ```
/// use rapidoku_core::Board;
///
/// let board = Board::new().set(0, 5);
/// assert_eq!(board.cell(0).value(), 5);
/// // the peer in the same row can no longer hold 5
/// assert!(!board.cell(1).possible(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with every candidate open in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::new(); SIZE],
        }
    }

    /// Returns the cell at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in the range 0-80.
    #[must_use]
    pub fn cell(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Assigns `value` to the cell at `idx` and eliminates `value` from
    /// every peer, returning the resulting board.
    ///
    /// This is the sole constraint-propagation primitive. It never fails;
    /// it may render peer cells invalid, which [`is_valid`](Board::is_valid)
    /// detects afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in the range 0-80.
    #[must_use]
    pub fn set(mut self, idx: usize, value: u8) -> Self {
        self.cells[idx].assign(value);
        for &peer in &PEERS[idx] {
            self.cells[peer].eliminate(value);
        }
        self
    }

    /// Returns `true` if no cell has been reduced to zero candidates.
    ///
    /// Used to reject contradictory input boards before search.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.cells.iter().any(Cell::is_invalid)
    }

    /// Returns `true` if every cell has been assigned a value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    /// Returns the index of the unsolved cell with the fewest remaining
    /// candidates, or `None` if every cell is solved.
    ///
    /// Ties are broken by the lowest index. This is the minimum-remaining-
    /// values rule used to pick the branch cell during search.
    #[must_use]
    pub fn pick_unsolved_cell(&self) -> Option<usize> {
        let mut picked = None;
        let mut fewest = DIM2 + 1;
        for (idx, cell) in self.cells.iter().enumerate() {
            if !cell.is_solved() {
                let n = cell.num_possible();
                if n < fewest {
                    picked = Some(idx);
                    fewest = n;
                }
            }
        }
        picked
    }

    /// Returns the compact 81-character rendering of this board: a digit
    /// for each solved cell, `.` for an unsolved cell, and `X` for a cell
    /// with no remaining candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rapidoku_core::Board;
    ///
    /// assert_eq!(Board::new().short_string(), ".".repeat(81));
    /// ```
    #[must_use]
    pub fn short_string(&self) -> String {
        self.cells.iter().map(Cell::marker).collect()
    }

    /// Returns the solved values as a 9×9 grid, with 0 for any cell that
    /// is not solved.
    ///
    /// Intended for consumers that export the grid, e.g. as a JSON array.
    #[must_use]
    pub fn values(&self) -> [[u8; DIM2]; DIM2] {
        let mut values = [[0; DIM2]; DIM2];
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_solved() {
                values[idx / DIM2][idx % DIM2] = cell.value();
            }
        }
        values
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from text: exactly 81 significant characters after
    /// stripping whitespace, where digits 1-9 are givens and any other
    /// character is a blank cell.
    ///
    /// After all givens are applied, the board must still be valid (no cell
    /// reduced to zero candidates) or parsing fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let significant: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if significant.len() != SIZE {
            return Err(ParseBoardError::WrongLength {
                len: significant.len(),
            });
        }

        let mut board = Board::new();
        for (idx, ch) in significant.into_iter().enumerate() {
            if let Some(value) = ch.to_digit(10)
                && value > 0
            {
                #[expect(clippy::cast_possible_truncation)]
                let value = value as u8;
                board = board.set(idx, value);
            }
        }

        if !board.is_valid() {
            return Err(ParseBoardError::Contradiction);
        }
        Ok(board)
    }
}

impl Display for Board {
    /// Formats the board as a 9×9 grid with blank lines between box bands:
    ///
    /// ```text
    /// 1 . .   6 . .   2 . .
    /// . 6 .   2 . 4   . . .
    /// . . 2   . . .   8 . 3
    ///
    /// 7 5 .   . . 8   . 1 .
    /// ...
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for band in 0..DIM {
            for line in 0..DIM {
                let row = band * DIM + line;
                for stack in 0..DIM {
                    for offset in 0..DIM {
                        let col = stack * DIM + offset;
                        f.write_char(self.cells[index_of(row, col)].marker())?;
                        if offset < DIM - 1 {
                            f.write_char(' ')?;
                        }
                    }
                    if stack < DIM - 1 {
                        f.write_str("   ")?;
                    }
                }
                f.write_char('\n')?;
            }
            if band < DIM - 1 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
