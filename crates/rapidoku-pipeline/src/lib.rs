//! Concurrent batch solving for streams of Sudoku puzzles.
//!
//! This crate wraps the [`rapidoku_core`] solver in a
//! producer/worker/collector pipeline:
//!
//! - [`loader`]: [`BoardLines`], an iterator parsing one board per line of
//!   any [`BufRead`](std::io::BufRead) source, failing fast on the first
//!   bad line
//! - [`pipeline`]: [`solve_stream`], which fans boards out to a fixed pool
//!   of worker threads over unbuffered channels and collects
//!   [`Solution`](rapidoku_core::Solution)s in completion order, and
//!   [`BatchSummary`], the aggregate count/throughput/hardest-puzzle report
//!
//! All hand-offs are rendezvous channels, so a slow consumer throttles the
//! workers and the workers throttle the loader; nothing buffers without
//! bound. Single-puzzle callers use [`Board::solve`](rapidoku_core::Board::solve)
//! directly and do not need this crate.
//!
//! # Examples
//!
//! ```
//! use rapidoku_pipeline::solve_stream;
//!
//! let puzzles = "\
//!     53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79\n";
//!
//! let summary = solve_stream(puzzles.as_bytes(), 2, |solution| {
//!     println!("{solution}");
//! })?;
//! assert_eq!(summary.count(), 1);
//! # Ok::<(), rapidoku_pipeline::LoadError>(())
//! ```

pub mod loader;
pub mod pipeline;

pub use self::{
    loader::{BoardLines, LoadError},
    pipeline::{BatchSummary, default_workers, solve_stream},
};
