//! Constraint propagation plus backtracking search.
//!
//! The search carries no state of its own; every recursive step operates on
//! the [`Board`] value it was handed, and backtracking works by discarding
//! whole board copies rather than undoing cell mutations.

use std::time::Instant;

use crate::{board::Board, index::GROUPS, solution::Solution};

impl Board {
    /// Solves this board, recording the wall-clock time around the search.
    ///
    /// Returns a [`Solution`] holding the original board, the solved board,
    /// and the elapsed time. For a valid, solvable input the search always
    /// succeeds; if it does not (contradictory input that slipped past
    /// [`is_valid`](Board::is_valid)), the solution carries the last board
    /// explored and its [`solved`](Solution::solved) board will not satisfy
    /// [`is_solved`](Board::is_solved).
    ///
    /// # Examples
    ///
    /// ```
    /// use rapidoku_core::Board;
    ///
    /// let board: Board =
    ///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
    ///         .parse()?;
    /// let solution = board.solve();
    /// assert!(solution.solved().is_solved());
    /// # Ok::<(), rapidoku_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn solve(&self) -> Solution {
        let start = Instant::now();
        let (solved, _) = self.search();
        Solution::new(*self, solved, start.elapsed())
    }

    /// One step of the recursive search: a single propagation sweep, then a
    /// branch on the most constrained cell.
    ///
    /// Returns the final board and whether it is a complete solution.
    fn search(&self) -> (Board, bool) {
        let mut board = *self;

        // One forward sweep over all groups and values: a value possible in
        // exactly one unsolved cell of a group is assigned immediately, and
        // the rest of the sweep continues on the updated board. The sweep
        // runs once per search level; it is not iterated to a fixed point.
        for group in &GROUPS {
            for value in 1..=9 {
                let mut found = None;
                let mut count = 0;
                for &idx in group {
                    let cell = board.cell(idx);
                    if !cell.is_solved() && cell.possible(value) {
                        count += 1;
                        if count > 1 {
                            // value cannot be pinned down in this group
                            break;
                        }
                        found = Some(idx);
                    }
                }
                if count == 1
                    && let Some(idx) = found
                {
                    board = board.set(idx, value);
                }
            }
        }

        // branch on the unsolved cell with the fewest candidates
        let Some(idx) = board.pick_unsolved_cell() else {
            return (board, true);
        };

        let cell = board.cell(idx);
        for value in 1..=9 {
            if cell.possible(value) {
                let (candidate, solved) = board.set(idx, value).search();
                if solved {
                    return (candidate, true);
                }
            }
        }

        // every candidate failed; the caller tries its next value
        (board, false)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::index::{DIM2, SIZE, index_of};

    const ESCARGOT: &str =
        "1....7.9..3..2...8..96..5....53..9...1..8...26....4...3......1..4......7..7...3..";
    const ESCARGOT_SOLVED: &str =
        "162857493534129678789643521475312986913586742628794135356478219241935867897261354";

    /// Asserts that every row, column, and box of `board` is a permutation
    /// of the digits 1-9.
    fn assert_complete(board: &Board) {
        assert!(board.is_solved());
        for group in &GROUPS {
            let mut seen = [false; 9];
            for &idx in group {
                let value = board.cell(idx).value();
                assert!((1..=9).contains(&value));
                assert!(!seen[usize::from(value - 1)], "duplicate {value} in group");
                seen[usize::from(value - 1)] = true;
            }
        }
    }

    fn parse(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn solves_an_easy_puzzle() {
        let board = parse(
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
        );
        let solution = board.solve();
        assert_complete(solution.solved());
        // givens survive into the solution
        assert_eq!(solution.solved().cell(index_of(0, 0)).value(), 5);
        assert_eq!(solution.solved().cell(index_of(8, 8)).value(), 9);
    }

    #[test]
    fn solves_the_empty_board() {
        let solution = Board::new().solve();
        assert_complete(solution.solved());
    }

    #[test]
    fn escargot_solves_to_the_known_grid() {
        let board = parse(ESCARGOT);
        let solution = board.solve();
        assert_complete(solution.solved());
        assert_eq!(solution.solved().short_string(), ESCARGOT_SOLVED);
    }

    #[test]
    fn solving_is_deterministic() {
        let board = parse(ESCARGOT);
        let first = board.solve();
        let second = board.solve();
        assert_eq!(first.solved(), second.solved());
    }

    #[test]
    fn solved_board_solves_to_itself() {
        let board = parse(ESCARGOT_SOLVED);
        let solution = board.solve();
        assert_eq!(solution.solved(), solution.original());
        assert_eq!(solution.solved(), &board);
    }

    #[test]
    fn short_string_of_solution_round_trips() {
        let solved = *parse(ESCARGOT).solve().solved();
        let reparsed = parse(&solved.short_string());
        assert_eq!(reparsed.solve().solved(), &solved);
    }

    #[test]
    fn solution_keeps_the_original() {
        let board = parse(ESCARGOT);
        let solution = board.solve();
        assert_eq!(solution.original(), &board);
        assert_eq!(solution.original().short_string(), ESCARGOT);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Blanking out arbitrary cells of a complete grid always leaves a
        /// solvable puzzle, and solving it yields a complete grid again.
        #[test]
        fn masked_complete_grids_resolve(mask in proptest::collection::vec(any::<bool>(), SIZE)) {
            let text: String = ESCARGOT_SOLVED
                .chars()
                .zip(&mask)
                .map(|(ch, &blank)| if blank { '.' } else { ch })
                .collect();
            let board: Board = text.parse().unwrap();
            let solution = board.solve();
            assert_complete(solution.solved());
        }
    }
}
