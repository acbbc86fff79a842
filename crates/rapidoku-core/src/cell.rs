//! Remaining-candidate state for a single cell.

/// The remaining-candidate state of one Sudoku square.
///
/// A cell tracks which digits 1-9 are still possible, plus an explicit
/// solved flag. Eliminations can leave a cell with a single remaining
/// candidate without marking it solved; only [`assign`](Cell::assign) sets
/// the flag. A cell whose candidates have all been eliminated is *invalid*
/// and signals a contradiction in the board that produced it.
///
/// # Examples
///
/// ```
/// use rapidoku_core::Cell;
///
/// let mut cell = Cell::new();
/// assert_eq!(cell.num_possible(), 9);
///
/// cell.eliminate(4);
/// assert!(!cell.possible(4));
/// assert!(!cell.is_solved());
///
/// cell.assign(7);
/// assert!(cell.is_solved());
/// assert_eq!(cell.value(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    possibles: [bool; 9],
    solved: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// Creates a cell with all nine candidates open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            possibles: [true; 9],
            solved: false,
        }
    }

    /// Assigns `value` to this cell, clearing every other candidate and
    /// setting the solved flag.
    ///
    /// Assignment always succeeds, even if `value` was already eliminated;
    /// validity is the caller's concern and is checked separately via
    /// [`is_invalid`](Cell::is_invalid).
    pub fn assign(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.solved = true;
        for (i, possible) in self.possibles.iter_mut().enumerate() {
            *possible = i == usize::from(value - 1);
        }
    }

    /// Removes `value` from this cell's candidates.
    ///
    /// Idempotent. May leave the cell with zero candidates; no error is
    /// raised here, the invalidity shows up via [`is_invalid`](Cell::is_invalid).
    pub fn eliminate(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.possibles[usize::from(value - 1)] = false;
    }

    /// Returns `true` if `value` is still a candidate.
    #[must_use]
    pub fn possible(&self, value: u8) -> bool {
        debug_assert!((1..=9).contains(&value));
        self.possibles[usize::from(value - 1)]
    }

    /// Returns the number of remaining candidates.
    #[must_use]
    pub fn num_possible(&self) -> usize {
        self.possibles.iter().filter(|&&p| p).count()
    }

    /// Returns the lowest remaining candidate, or 0 if none remain.
    ///
    /// Only meaningful for a solved cell, where exactly one candidate is set.
    #[must_use]
    pub fn value(&self) -> u8 {
        for (i, &possible) in self.possibles.iter().enumerate() {
            if possible {
                #[expect(clippy::cast_possible_truncation)]
                return i as u8 + 1;
            }
        }
        0
    }

    /// Returns `true` if this cell has been explicitly assigned a value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns `true` if no candidates remain, i.e. the cell contradicts
    /// its peers.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.possibles.iter().any(|&p| p)
    }

    /// Returns the single-character rendering of this cell: its digit when
    /// solved, `X` when invalid, `.` otherwise.
    #[must_use]
    pub fn marker(&self) -> char {
        if self.is_invalid() {
            'X'
        } else if self.solved {
            char::from(b'0' + self.value())
        } else {
            '.'
        }
    }
}
