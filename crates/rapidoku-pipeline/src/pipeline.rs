//! The producer/worker/collector pipeline.

use std::{
    fmt::{self, Display, Formatter},
    io::BufRead,
    sync::{Mutex, mpsc},
    thread,
    time::{Duration, Instant},
};

use log::{debug, info};
use rapidoku_core::{Board, Solution};

use crate::loader::{BoardLines, LoadError};

/// Aggregate statistics for one batch run.
///
/// Collected in completion order, so none of the statistics depend on the
/// order workers finish in.
#[derive(Debug)]
pub struct BatchSummary {
    count: u64,
    elapsed: Duration,
    hardest: Option<Solution>,
}

impl BatchSummary {
    fn new() -> Self {
        Self {
            count: 0,
            elapsed: Duration::ZERO,
            hardest: None,
        }
    }

    /// Folds one completed solution into the running statistics.
    fn observe(&mut self, solution: Solution) {
        self.count += 1;
        let is_harder = self
            .hardest
            .as_ref()
            .is_none_or(|hardest| solution.elapsed() > hardest.elapsed());
        if is_harder {
            self.hardest = Some(solution);
        }
    }

    /// Returns the number of puzzles solved.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the wall-clock duration of the whole batch.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the solution with the largest elapsed solve time, or `None`
    /// for an empty batch.
    #[must_use]
    pub fn hardest(&self) -> Option<&Solution> {
        self.hardest.as_ref()
    }

    /// Returns the batch throughput in puzzles per second.
    #[must_use]
    pub fn rate(&self) -> f64 {
        if self.elapsed.is_zero() {
            return 0.0;
        }
        #[expect(clippy::cast_precision_loss)]
        let count = self.count as f64;
        count / self.elapsed.as_secs_f64()
    }
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solved {} puzzles in {:?} ({:.2} per second)",
            self.count,
            self.elapsed,
            self.rate()
        )
    }
}

/// Returns the default worker-pool size: the hardware's available
/// parallelism, or 1 if it cannot be determined.
#[must_use]
pub fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, std::num::NonZero::get)
}

/// Solves every board in `reader` with a pool of `workers` threads,
/// invoking `on_solution` for each result in completion order.
///
/// The loader thread parses one board per line and hands each board to
/// exactly one worker over an unbuffered channel; workers hand solutions to
/// the collector (the calling thread) the same way. Zero-capacity channels
/// give implicit backpressure: a slow collector throttles the workers,
/// which throttle the loader. The output side closes once the last worker
/// exits, so for N input boards the collector observes exactly N solutions.
///
/// Solutions arrive in whatever order workers finish, not input order.
/// There is no cancellation; the pipeline runs to the end of the input or
/// to the first load failure.
///
/// # Errors
///
/// Returns the underlying [`LoadError`] if reading or parsing a line fails.
/// The failure is fatal for the batch: the input feed closes, in-flight
/// solves drain, and no further lines are consumed.
pub fn solve_stream<R, F>(reader: R, workers: usize, mut on_solution: F) -> Result<BatchSummary, LoadError>
where
    R: BufRead + Send,
    F: FnMut(&Solution),
{
    let workers = workers.max(1);
    let start = Instant::now();
    let mut summary = BatchSummary::new();

    let (board_tx, board_rx) = mpsc::sync_channel::<Board>(0);
    let (solution_tx, solution_rx) = mpsc::sync_channel::<Solution>(0);
    // workers share the single receiver; the mutex outlives the scope so
    // scoped threads may borrow it
    let board_rx = Mutex::new(board_rx);
    let board_rx = &board_rx;

    let loaded = thread::scope(|scope| {
        let loader = scope.spawn(move || {
            let mut lines = BoardLines::new(reader);
            for line in &mut lines {
                let board = line?;
                if board_tx.send(board).is_err() {
                    // all workers are gone; nothing left to feed
                    break;
                }
            }
            Ok::<u64, LoadError>(lines.boards_read())
        });

        for id in 0..workers {
            let solution_tx = solution_tx.clone();
            scope.spawn(move || {
                debug!("worker {id} started");
                loop {
                    // hold the lock only for the hand-off, never while solving
                    let board = match board_rx.lock() {
                        Ok(receiver) => receiver.recv(),
                        Err(_) => break,
                    };
                    let Ok(board) = board else {
                        break;
                    };
                    let solution = board.solve();
                    if solution_tx.send(solution).is_err() {
                        break;
                    }
                }
                debug!("worker {id} exiting");
            });
        }
        // the workers' clones keep the output feed open; once they all
        // exit, the collector below runs dry and terminates
        drop(solution_tx);

        for solution in solution_rx {
            on_solution(&solution);
            summary.observe(solution);
        }

        match loader.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    });

    summary.elapsed = start.elapsed();
    let read = loaded?;
    info!(
        "batch finished: {} boards read, {} solved in {:?}",
        read, summary.count, summary.elapsed
    );
    debug_assert_eq!(read, summary.count);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const ESCARGOT_SOLVED: &str =
        "162857493534129678789643521475312986913586742628794135356478219241935867897261354";

    /// A small batch of quick puzzles: the easy classic plus complete grids
    /// with a handful of cells blanked out.
    fn test_batch() -> String {
        let mut text = format!("{EASY}\n");
        for blank in 0..5 {
            let masked: String = ESCARGOT_SOLVED
                .char_indices()
                .map(|(i, ch)| if i % 7 == blank { '.' } else { ch })
                .collect();
            text.push_str(&masked);
            text.push('\n');
        }
        text
    }

    fn count_with_workers(workers: usize) {
        let batch = test_batch();
        let expected = batch.lines().count() as u64;

        let mut seen = Vec::new();
        let summary = solve_stream(batch.as_bytes(), workers, |solution| {
            seen.push(*solution.solved());
        })
        .unwrap();

        assert_eq!(summary.count(), expected);
        assert_eq!(seen.len() as u64, expected);
        assert!(seen.iter().all(Board::is_solved));
        assert!(summary.hardest().is_some());
    }

    #[test]
    fn one_worker_observes_every_board() {
        count_with_workers(1);
    }

    #[test]
    fn two_workers_observe_every_board() {
        count_with_workers(2);
    }

    #[test]
    fn eight_workers_observe_every_board() {
        count_with_workers(8);
    }

    #[test]
    fn zero_workers_is_clamped_to_one() {
        count_with_workers(0);
    }

    #[test]
    fn empty_input_yields_an_empty_summary() {
        let summary = solve_stream(&b""[..], 4, |_| {}).unwrap();
        assert_eq!(summary.count(), 0);
        assert!(summary.hardest().is_none());
        assert_eq!(summary.rate(), 0.0);
    }

    #[test]
    fn bad_line_aborts_the_batch() {
        let batch = format!("{EASY}\nbogus\n{EASY}\n");
        let result = solve_stream(batch.as_bytes(), 2, |_| {});
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn hardest_tracks_maximum_elapsed_regardless_of_order() {
        let board: Board = EASY.parse().unwrap();
        let durations = [3_u64, 9, 250, 1, 40];

        let mut summary = BatchSummary::new();
        for &millis in &durations {
            summary.observe(Solution::new(
                board,
                board,
                Duration::from_millis(millis),
            ));
        }

        assert_eq!(summary.count(), durations.len() as u64);
        let hardest = summary.hardest().unwrap();
        assert_eq!(hardest.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn summary_display_includes_count_and_rate() {
        let mut summary = BatchSummary::new();
        summary.count = 10;
        summary.elapsed = Duration::from_secs(2);
        assert_eq!(
            summary.to_string(),
            "Solved 10 puzzles in 2s (5.00 per second)"
        );
    }
}
