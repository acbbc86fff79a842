//! Core solving engine for standard 9×9 Sudoku puzzles.
//!
//! This crate provides the data model and search algorithm used by the rest
//! of the workspace:
//!
//! - [`cell`]: [`Cell`], the remaining-candidate state of a single square
//! - [`index`]: the fixed grid geometry and the precomputed [`PEERS`] and
//!   [`GROUPS`] adjacency tables shared by all boards
//! - [`board`]: [`Board`], an 81-cell grid with copy-on-write assignment
//! - [`solver`]: the constraint-propagation + backtracking search,
//!   exposed as [`Board::solve`]
//! - [`solution`]: [`Solution`], pairing a puzzle with its solved grid and
//!   elapsed solve time
//! - [`error`]: [`ParseBoardError`]
//!
//! [`PEERS`]: index::PEERS
//! [`GROUPS`]: index::GROUPS
//!
//! # Examples
//!
//! ```
//! use rapidoku_core::Board;
//!
//! let board: Board = "\
//!     53..7....\
//!     6..195...\
//!     .98....6.\
//!     8...6...3\
//!     4..8.3..1\
//!     7...2...6\
//!     .6....28.\
//!     ...419..5\
//!     ....8..79"
//!     .parse()?;
//!
//! let solution = board.solve();
//! assert!(solution.solved().is_solved());
//! # Ok::<(), rapidoku_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod error;
pub mod index;
pub mod solution;
pub mod solver;

pub use self::{board::Board, cell::Cell, error::ParseBoardError, solution::Solution};
