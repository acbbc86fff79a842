//! The record produced by one completed solve.

use std::{
    fmt::{self, Display, Formatter},
    time::Duration,
};

use crate::board::Board;

/// An immutable record pairing a puzzle with its solved board and the
/// wall-clock time the search took.
///
/// The elapsed time is the only difficulty measure this crate provides;
/// batch consumers use it to track the hardest puzzle in a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    original: Board,
    solved: Board,
    elapsed: Duration,
}

impl Solution {
    /// Creates a solution record.
    #[must_use]
    pub fn new(original: Board, solved: Board, elapsed: Duration) -> Self {
        Self {
            original,
            solved,
            elapsed,
        }
    }

    /// Returns the board as it was before solving.
    #[must_use]
    pub fn original(&self) -> &Board {
        &self.original
    }

    /// Returns the solved board.
    ///
    /// When the search failed (which cannot happen for a valid, solvable
    /// input), this is the last board explored rather than a complete grid;
    /// callers needing failure tolerance check
    /// [`is_solved`](Board::is_solved) on it.
    #[must_use]
    pub fn solved(&self) -> &Board {
        &self.solved
    }

    /// Returns the wall-clock duration of the search.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Display for Solution {
    /// Formats as the original short form, a newline, then the solved short
    /// form followed by the elapsed time.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{} {:?}",
            self.original.short_string(),
            self.solved.short_string(),
            self.elapsed
        )
    }
}
